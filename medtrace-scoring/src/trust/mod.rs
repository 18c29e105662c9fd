//! Supplier trust scoring.
//!
//! ## Modules
//!
//! - [`tally`]: per-supplier counters and the clamped score
//! - [`scorer`]: grouping, labelling and the worst-first ranking

pub mod scorer;
pub mod tally;

pub use scorer::{compute_trust_scores, sort_worst_first, TrustScorer};
pub use tally::{clamp_score, SupplierTally};
