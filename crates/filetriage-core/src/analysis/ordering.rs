/// Priority ordering of classified records.
use crate::model::ClassifiedRecord;

/// Sort records ascending by priority (1 first, 5 last).
///
/// The sort is stable: records with equal priority keep their relative
/// input order. Three categories share priority 3, so stability is what
/// makes the report deterministic for a given input list.
pub fn sort_by_priority(mut records: Vec<ClassifiedRecord>) -> Vec<ClassifiedRecord> {
    records.sort_by_key(|record| record.priority);
    records
}
