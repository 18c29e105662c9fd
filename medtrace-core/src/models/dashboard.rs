use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::supplier::SupplierId;

/// Supply counts per compliance status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComplianceOverview {
    pub total_supplies: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub warning: usize,
    pub pending: usize,
    /// Supplies with at least one risk flag, whatever their status.
    pub flagged: usize,
}

/// A supply that expires inside the near-expiry window (or already has).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NearExpiryEntry {
    pub supply_id: String,
    pub supplier_id: Option<SupplierId>,
    pub supplier_name: String,
    pub medicine_id: Option<String>,
    pub expiry_date: NaiveDate,
    pub days_to_expiry: i64,
}

/// Per-supplier risk bar: rejections plus flagged supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierRisk {
    pub supplier_id: SupplierId,
    pub display_name: String,
    pub rejected: usize,
    pub warnings: usize,
    pub risk_score: usize,
}

/// Everything the analytics dashboard shows in one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardAnalytics {
    pub compliance: ComplianceOverview,
    pub near_expiry: Vec<NearExpiryEntry>,
    pub supplier_risk: Vec<SupplierRisk>,
}
