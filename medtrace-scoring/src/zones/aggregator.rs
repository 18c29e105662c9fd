use std::collections::BTreeSet;

use medtrace_core::config::ZoneConfig;
use medtrace_core::models::{AlertRecord, AlertSummary, RiskZone, Severity, ZoneReport};
use medtrace_core::traits::IZoneAggregator;

use crate::grouping::group_reduce;

/// Running state for one zone.
#[derive(Debug, Clone)]
struct ZoneAccumulator {
    count: usize,
    /// Highest severity seen so far; `Unknown` is the identity of `max`.
    severity: Severity,
    medicines: BTreeSet<String>,
}

impl Default for ZoneAccumulator {
    fn default() -> Self {
        Self {
            count: 0,
            severity: Severity::Unknown,
            medicines: BTreeSet::new(),
        }
    }
}

impl ZoneAccumulator {
    fn observe(&mut self, alert: &AlertRecord) {
        self.count += 1;
        self.severity = self.severity.max(alert.severity);
        if let Some(name) = alert.medicine() {
            self.medicines.insert(name.to_string());
        }
    }

    fn into_zone(self, zone: String) -> RiskZone {
        RiskZone {
            zone,
            alert_count: self.count,
            severity: self.severity.into(),
            distinct_medicine_count: self.medicines.len(),
        }
    }
}

/// Rolls alerts up into ranked risk zones.
#[derive(Debug, Clone, Default)]
pub struct ZoneAggregator {
    config: ZoneConfig,
}

impl ZoneAggregator {
    pub fn new(config: &ZoneConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    fn zone_key(&self, alert: &AlertRecord) -> String {
        let zone = alert.zone.trim();
        if zone.is_empty() {
            self.config.unknown_zone_label.clone()
        } else {
            zone.to_string()
        }
    }

    /// Every zone, busiest first (ties by zone name), before truncation.
    pub fn all_zones(&self, alerts: &[AlertRecord]) -> Vec<RiskZone> {
        let groups = group_reduce(
            alerts,
            |alert| Some(self.zone_key(alert)),
            |acc: &mut ZoneAccumulator, alert| acc.observe(alert),
        );
        let mut zones: Vec<RiskZone> = groups
            .into_iter()
            .map(|(zone, acc)| acc.into_zone(zone))
            .collect();
        zones.sort_by(|a, b| {
            b.alert_count
                .cmp(&a.alert_count)
                .then_with(|| a.zone.cmp(&b.zone))
        });
        zones
    }

    /// Top zones plus global severity tallies.
    pub fn aggregate_zones(&self, alerts: &[AlertRecord]) -> ZoneReport {
        let mut zones = self.all_zones(alerts);
        zones.truncate(self.config.top_n);
        ZoneReport {
            zones,
            summary: summarize(alerts),
        }
    }
}

/// Per-severity tallies over every alert.
pub fn summarize(alerts: &[AlertRecord]) -> AlertSummary {
    alerts.iter().fold(AlertSummary::default(), |mut summary, alert| {
        summary.record(alert.severity);
        summary
    })
}

impl IZoneAggregator for ZoneAggregator {
    fn aggregate(&self, alerts: &[AlertRecord]) -> ZoneReport {
        self.aggregate_zones(alerts)
    }
}

/// Top-10 zone rollup with the default configuration.
pub fn aggregate_zones(alerts: &[AlertRecord]) -> ZoneReport {
    ZoneAggregator::default().aggregate_zones(alerts)
}
