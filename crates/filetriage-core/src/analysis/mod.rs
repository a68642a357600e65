/// Analysis modules — post-classification ordering and statistics.

pub mod distribution;
pub mod ordering;

pub use distribution::{aggregate, CategoryShare, Distribution, PriorityShare};
pub use ordering::sort_by_priority;
