use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::alert::Severity;

/// Severity reported for a whole zone.
///
/// Zones only distinguish LOW, HIGH and CRITICAL; MEDIUM and unrecognized
/// alert severities report as LOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ZoneSeverity {
    Low,
    High,
    Critical,
}

impl From<Severity> for ZoneSeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => Self::Critical,
            Severity::High => Self::High,
            Severity::Medium | Severity::Low | Severity::Unknown => Self::Low,
        }
    }
}

impl ZoneSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// One zone in the risk rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskZone {
    pub zone: String,
    /// Always at least 1: zones only exist for observed alerts.
    pub alert_count: usize,
    pub severity: ZoneSeverity,
    pub distinct_medicine_count: usize,
}

/// Global per-severity alert tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlertSummary {
    pub total_alerts: usize,
    pub critical_alerts: usize,
    pub high_alerts: usize,
    pub medium_alerts: usize,
    pub low_alerts: usize,
}

impl AlertSummary {
    /// Count one alert. Unknown severities only move `total_alerts`.
    pub fn record(&mut self, severity: Severity) {
        self.total_alerts += 1;
        match severity {
            Severity::Critical => self.critical_alerts += 1,
            Severity::High => self.high_alerts += 1,
            Severity::Medium => self.medium_alerts += 1,
            Severity::Low => self.low_alerts += 1,
            Severity::Unknown => {}
        }
    }
}

/// Output of the zone aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ZoneReport {
    pub zones: Vec<RiskZone>,
    pub summary: AlertSummary,
}
