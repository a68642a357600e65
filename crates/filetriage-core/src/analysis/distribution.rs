/// Distribution statistics — per-category and per-priority tallies with
/// percentage shares.
///
/// Percentages are pre-computed here so renderers never repeat the
/// division, mirroring how record priorities are derived exactly once.
use serde::Serialize;
use std::collections::HashMap;

use crate::model::{Category, ClassifiedRecord};

/// Count and percentage share for a single category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub count: u64,
    /// Share of the total record count, 0.0–100.0.
    pub percent: f64,
}

/// Count and percentage share for a single priority level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityShare {
    pub priority: u8,
    pub count: u64,
    /// Share of the total record count, 0.0–100.0.
    pub percent: f64,
}

/// Aggregate statistics over a batch of classified records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distribution {
    /// Total number of records aggregated.
    pub total: u64,

    /// Categories that appeared at least once, ordered alphabetically by
    /// label for deterministic rendering.
    pub categories: Vec<CategoryShare>,

    /// Priority levels that appeared at least once, ordered ascending.
    pub priorities: Vec<PriorityShare>,
}

/// Tally records into per-category and per-priority distributions.
///
/// An empty input yields `total == 0` with empty share lists — the
/// percentage division is never reached, so there is no divide-by-zero
/// hazard to guard at call sites.
pub fn aggregate(records: &[ClassifiedRecord]) -> Distribution {
    if records.is_empty() {
        return Distribution::default();
    }

    // At most 7 categories and 5 priority levels — pre-size to avoid rehashing.
    let mut category_counts: HashMap<Category, u64> = HashMap::with_capacity(7);
    let mut priority_counts: HashMap<u8, u64> = HashMap::with_capacity(5);

    for record in records {
        *category_counts.entry(record.category).or_insert(0) += 1;
        *priority_counts.entry(record.priority).or_insert(0) += 1;
    }

    let total = records.len() as u64;
    let percent_of_total = |count: u64| (count as f64 / total as f64) * 100.0;

    let mut categories: Vec<CategoryShare> = category_counts
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category,
            count,
            percent: percent_of_total(count),
        })
        .collect();
    categories.sort_by_key(|share| share.category.label());

    let mut priorities: Vec<PriorityShare> = priority_counts
        .into_iter()
        .map(|(priority, count)| PriorityShare {
            priority,
            count,
            percent: percent_of_total(count),
        })
        .collect();
    priorities.sort_by_key(|share| share.priority);

    Distribution {
        total,
        categories,
        priorities,
    }
}
