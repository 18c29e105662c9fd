use crate::models::{AlertRecord, ZoneReport};

/// Alert rollup by zone.
pub trait IZoneAggregator: Send + Sync {
    /// Ranked zones plus global severity tallies.
    fn aggregate(&self, alerts: &[AlertRecord]) -> ZoneReport;
}
