//! Risk-zone rollup over alerts.
//!
//! Zone severity is a max-reduction over `CRITICAL > HIGH > MEDIUM > LOW >
//! UNKNOWN`, reported on the zone scale (LOW, HIGH, CRITICAL). Because
//! `max` is associative and commutative, alert order never changes a zone.

pub mod aggregator;

pub use aggregator::{aggregate_zones, summarize, ZoneAggregator};
