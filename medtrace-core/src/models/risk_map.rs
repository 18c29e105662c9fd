use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::supplier::SupplierId;

/// Map colour of a supplier's accumulated risk points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum RiskMapZone {
    Red,
    Yellow,
    Green,
}

impl RiskMapZone {
    /// Band a risk score. Both thresholds are exclusive.
    ///
    /// ```
    /// use medtrace_core::models::RiskMapZone;
    ///
    /// assert_eq!(RiskMapZone::from_score(41, 40, 20), RiskMapZone::Red);
    /// assert_eq!(RiskMapZone::from_score(40, 40, 20), RiskMapZone::Yellow);
    /// assert_eq!(RiskMapZone::from_score(20, 40, 20), RiskMapZone::Green);
    /// ```
    pub fn from_score(score: u64, red_threshold: u64, yellow_threshold: u64) -> Self {
        if score > red_threshold {
            Self::Red
        } else if score > yellow_threshold {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
        }
    }
}

impl std::fmt::Display for RiskMapZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One supplier on the risk map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierRiskPoint {
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    /// Accumulated points; higher is riskier and there is no ceiling.
    pub risk_score: u64,
    pub zone: RiskMapZone,
    pub blacklisted: bool,
    pub total_supplies: usize,
    /// Alerts linked to the supplier through their supply.
    pub alert_count: usize,
}

/// Every supplier with its risk zone, riskiest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierRiskMap {
    pub total_suppliers: usize,
    /// Suppliers in the RED zone.
    pub high_risk: usize,
    /// Suppliers in the YELLOW zone.
    pub medium_risk: usize,
    /// Suppliers in the GREEN zone.
    pub low_risk: usize,
    pub suppliers: Vec<SupplierRiskPoint>,
}
