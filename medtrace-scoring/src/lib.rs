//! # medtrace-scoring
//!
//! Pure aggregators over already-fetched supply and alert listings.
//!
//! | Aggregator | Input | Output |
//! |------------|-------|--------|
//! | [`TrustScorer`] | supplies + supplier directory | worst-first supplier trust |
//! | [`ZoneAggregator`] | alerts | top zones by alert count + severity tallies |
//! | [`PriorityRanker`] | supplies + reference date | per-supply urgency, input order |
//! | [`dashboard`] | supplies + directory + reference date | compliance, near expiry, supplier risk |
//! | [`RiskMapBuilder`] | supplies + directory + alerts | supplier risk points, RED / YELLOW / GREEN |
//! | [`CorruptionDetector`] | supplies + directory | blacklist, favoritism, batch and bias flags |
//!
//! None of them do I/O or hold state between calls; [`RiskEngine`] bundles
//! them behind one configuration and adds structured logging.

pub mod corruption;
pub mod dashboard;
pub mod engine;
pub mod grouping;
pub mod priority;
pub mod risk_map;
pub mod snapshot;
pub mod trust;
pub mod zones;

pub use corruption::{detect_corruption, CorruptionDetector, DecisionTally};
pub use engine::RiskEngine;
pub use grouping::group_reduce;
pub use priority::{rank_priority, urgent_first, PriorityRanker};
pub use risk_map::{risk_map, RiskMapBuilder, RiskPoints};
pub use snapshot::Snapshot;
pub use trust::{compute_trust_scores, SupplierTally, TrustScorer};
pub use zones::{aggregate_zones, ZoneAggregator};
