//! Dashboard analytics: compliance overview, near-expiry listing and
//! supplier risk bars.

use chrono::NaiveDate;

use medtrace_core::config::DashboardConfig;
use medtrace_core::constants::UNKNOWN_SUPPLIER_NAME;
use medtrace_core::models::{
    ComplianceOverview, ComplianceStatus, DashboardAnalytics, NearExpiryEntry, SupplierDirectory,
    SupplierRisk, SupplyRecord,
};

use crate::trust::TrustScorer;

/// Counts per compliance status, plus flagged supplies.
pub fn compliance_overview(supplies: &[SupplyRecord]) -> ComplianceOverview {
    supplies
        .iter()
        .fold(ComplianceOverview::default(), |mut overview, supply| {
            overview.total_supplies += 1;
            match supply.compliance_status {
                ComplianceStatus::Accepted => overview.accepted += 1,
                ComplianceStatus::Rejected => overview.rejected += 1,
                ComplianceStatus::Warning => overview.warning += 1,
                ComplianceStatus::Pending => overview.pending += 1,
            }
            if supply.is_flagged() {
                overview.flagged += 1;
            }
            overview
        })
}

/// Supplies expiring on or before `reference_date + window_days`, expired
/// ones included, soonest first.
pub fn near_expiry(
    supplies: &[SupplyRecord],
    directory: &SupplierDirectory,
    reference_date: NaiveDate,
    window_days: i64,
) -> Vec<NearExpiryEntry> {
    let mut entries: Vec<NearExpiryEntry> = supplies
        .iter()
        .filter_map(|supply| {
            let expiry_date = supply.expiry_date?;
            let days_to_expiry = supply.days_to_expiry(reference_date)?;
            if days_to_expiry > window_days {
                return None;
            }
            let supplier_id = supply.supplier().cloned();
            let supplier_name = match &supplier_id {
                Some(id) => directory.display_name(id).to_string(),
                None => UNKNOWN_SUPPLIER_NAME.to_string(),
            };
            Some(NearExpiryEntry {
                supply_id: supply.id.clone(),
                supplier_id,
                supplier_name,
                medicine_id: supply.medicine_id.clone(),
                expiry_date,
                days_to_expiry,
            })
        })
        .collect();
    entries.sort_by(|a, b| {
        a.expiry_date
            .cmp(&b.expiry_date)
            .then_with(|| a.supply_id.cmp(&b.supply_id))
    });
    entries
}

/// Per-supplier `rejected + warnings`, riskiest first (ties by supplier id).
pub fn supplier_risk(supplies: &[SupplyRecord], directory: &SupplierDirectory) -> Vec<SupplierRisk> {
    let mut risks: Vec<SupplierRisk> = TrustScorer::tally(supplies)
        .into_iter()
        .map(|(supplier_id, tally)| SupplierRisk {
            display_name: directory.display_name(&supplier_id).to_string(),
            supplier_id,
            rejected: tally.rejected,
            warnings: tally.warnings,
            risk_score: tally.rejected + tally.warnings,
        })
        .collect();
    risks.sort_by(|a, b| {
        b.risk_score
            .cmp(&a.risk_score)
            .then_with(|| a.supplier_id.cmp(&b.supplier_id))
    });
    risks
}

/// All three dashboard views in one snapshot.
pub fn build_dashboard(
    supplies: &[SupplyRecord],
    directory: &SupplierDirectory,
    reference_date: NaiveDate,
    config: &DashboardConfig,
) -> DashboardAnalytics {
    DashboardAnalytics {
        compliance: compliance_overview(supplies),
        near_expiry: near_expiry(
            supplies,
            directory,
            reference_date,
            config.near_expiry_window_days,
        ),
        supplier_risk: supplier_risk(supplies, directory),
    }
}
