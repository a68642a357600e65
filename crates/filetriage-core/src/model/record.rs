/// A single classification result for one input filename.
///
/// Records are plain immutable data: created once by the classifier, never
/// mutated afterwards. Sorting and aggregation only reorder or read them.
use compact_str::CompactString;
use serde::Serialize;

use super::category::Category;

/// The (filename, extension, category, priority) tuple produced for each
/// input filename.
///
/// `priority` is derived solely from `category` in [`ClassifiedRecord::new`]
/// — it is never set independently, so the two fields cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedRecord {
    /// Original input string, unmodified.
    pub filename: CompactString,

    /// Lowercase text after the last `.`, or empty when the filename has
    /// no extension (no dot, or the dot is the final character).
    pub extension: CompactString,

    /// Category resolved via the registry, with
    /// [`Category::Miscellaneous`] as the fallback.
    pub category: Category,

    /// Processing priority in [1, 5], lower = higher priority.
    pub priority: u8,
}

impl ClassifiedRecord {
    /// Create a record for `filename`, deriving `priority` from `category`.
    pub fn new(filename: CompactString, extension: CompactString, category: Category) -> Self {
        Self {
            filename,
            extension,
            category,
            priority: category.priority(),
        }
    }
}
