use chrono::NaiveDate;

use crate::models::{PriorityEntry, SupplyRecord};

/// Per-supply usage priority.
pub trait IPriorityRanker: Send + Sync {
    /// One entry per supply, in input order.
    fn rank(&self, supplies: &[SupplyRecord], reference_date: NaiveDate) -> Vec<PriorityEntry>;
}
