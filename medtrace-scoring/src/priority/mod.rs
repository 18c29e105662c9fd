//! Per-supply usage priority.
//!
//! ## Modules
//!
//! - [`policy`]: recommendation bands and the capped priority score
//! - [`ranker`]: [`PriorityRanker`] and the urgency ordering

pub mod policy;
pub mod ranker;

pub use policy::{priority_score, recommend};
pub use ranker::{rank_priority, urgent_first, PriorityRanker};
