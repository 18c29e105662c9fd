//! Supplier risk map: penalty points per supplier, banded RED / YELLOW / GREEN.
//!
//! Points accumulate upward from zero:
//!
//! | Finding | Points |
//! |---------|--------|
//! | REJECTED supply | 5 |
//! | FAKE supply | 10 |
//! | SUSPICIOUS supply | 5 |
//! | supply with any risk flag | 3 (once per supply) |
//! | blacklisted supplier | 20 |
//! | linked HIGH or CRITICAL alert | 4 |
//! | any other linked alert | 2 |
//!
//! An alert is linked to a supplier through its `supply_id`. Every supplier
//! in the directory is on the map, even with no supplies.

use std::collections::{BTreeMap, HashMap};

use medtrace_core::config::RiskMapConfig;
use medtrace_core::models::{
    AlertRecord, ComplianceStatus, FakeStatus, RiskMapZone, Severity, SupplierDirectory,
    SupplierId, SupplierRiskMap, SupplierRiskPoint, SupplyRecord,
};
use medtrace_core::traits::IRiskMapBuilder;

use crate::grouping::group_reduce;

/// Points and counters accumulated for one supplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskPoints {
    pub supplies: usize,
    pub alerts: usize,
    pub points: u64,
}

impl RiskPoints {
    pub fn observe_supply(&mut self, supply: &SupplyRecord, config: &RiskMapConfig) {
        self.supplies += 1;
        if supply.compliance_status == ComplianceStatus::Rejected {
            self.add(config.rejected_penalty);
        }
        match supply.fake_status {
            Some(FakeStatus::Fake) => self.add(config.fake_penalty),
            Some(FakeStatus::Suspicious) => self.add(config.suspicious_penalty),
            Some(FakeStatus::None) | None => {}
        }
        if supply.is_flagged() {
            self.add(config.flagged_penalty);
        }
    }

    pub fn observe_alert(&mut self, alert: &AlertRecord, config: &RiskMapConfig) {
        self.alerts += 1;
        match alert.severity {
            Severity::High | Severity::Critical => self.add(config.high_alert_penalty),
            Severity::Medium | Severity::Low | Severity::Unknown => self.add(config.alert_penalty),
        }
    }

    fn add(&mut self, points: u64) {
        self.points = self.points.saturating_add(points);
    }
}

/// Builds the supplier risk map.
#[derive(Debug, Clone, Default)]
pub struct RiskMapBuilder {
    config: RiskMapConfig,
}

impl RiskMapBuilder {
    pub fn new(config: &RiskMapConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &RiskMapConfig {
        &self.config
    }

    /// Points per supplier from supplies and linked alerts, blacklist excluded.
    ///
    /// Alerts whose supply is unknown or has no supplier are ignored. When
    /// two supplies share an id the later one owns its alerts.
    pub fn tally(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
        alerts: &[AlertRecord],
    ) -> BTreeMap<SupplierId, RiskPoints> {
        let mut groups = group_reduce(
            supplies,
            |supply| supply.supplier().cloned(),
            |points: &mut RiskPoints, supply| points.observe_supply(supply, &self.config),
        );
        for id in directory.ids() {
            groups.entry(id.clone()).or_default();
        }

        let owners: HashMap<&str, &SupplierId> = supplies
            .iter()
            .filter_map(|supply| Some((supply.id.as_str(), supply.supplier()?)))
            .collect();
        for alert in alerts {
            let Some(owner) = alert.supply_id.as_deref().and_then(|id| owners.get(id)) else {
                continue;
            };
            groups
                .entry((*owner).clone())
                .or_default()
                .observe_alert(alert, &self.config);
        }
        groups
    }

    /// Final score and zone for one supplier.
    pub fn assess(
        &self,
        supplier_id: SupplierId,
        points: &RiskPoints,
        directory: &SupplierDirectory,
    ) -> SupplierRiskPoint {
        let blacklisted = directory.is_blacklisted(&supplier_id);
        let risk_score = if blacklisted {
            points.points.saturating_add(self.config.blacklist_penalty)
        } else {
            points.points
        };
        SupplierRiskPoint {
            supplier_name: directory.display_name(&supplier_id).to_string(),
            supplier_id,
            risk_score,
            zone: RiskMapZone::from_score(
                risk_score,
                self.config.red_threshold,
                self.config.yellow_threshold,
            ),
            blacklisted,
            total_supplies: points.supplies,
            alert_count: points.alerts,
        }
    }

    /// Every supplier, riskiest first (ties by supplier id), with zone counts.
    pub fn build(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
        alerts: &[AlertRecord],
    ) -> SupplierRiskMap {
        let mut suppliers: Vec<SupplierRiskPoint> = self
            .tally(supplies, directory, alerts)
            .into_iter()
            .map(|(supplier_id, points)| self.assess(supplier_id, &points, directory))
            .collect();
        suppliers.sort_by(|a, b| {
            b.risk_score
                .cmp(&a.risk_score)
                .then_with(|| a.supplier_id.cmp(&b.supplier_id))
        });

        let count = |zone: RiskMapZone| suppliers.iter().filter(|s| s.zone == zone).count();
        SupplierRiskMap {
            total_suppliers: suppliers.len(),
            high_risk: count(RiskMapZone::Red),
            medium_risk: count(RiskMapZone::Yellow),
            low_risk: count(RiskMapZone::Green),
            suppliers,
        }
    }
}

impl IRiskMapBuilder for RiskMapBuilder {
    fn build_map(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
        alerts: &[AlertRecord],
    ) -> SupplierRiskMap {
        self.build(supplies, directory, alerts)
    }
}

/// Risk map with the default weights.
///
/// ```
/// use medtrace_core::models::{ComplianceStatus, RiskMapZone, SupplierDirectory, SupplyRecord};
/// use medtrace_scoring::risk_map;
///
/// let supplies: Vec<SupplyRecord> = (0..5)
///     .map(|i| SupplyRecord::new(i.to_string(), ComplianceStatus::Rejected).with_supplier("S1"))
///     .collect();
/// let map = risk_map(&supplies, &SupplierDirectory::new(), &[]);
/// assert_eq!(map.suppliers[0].risk_score, 25);
/// assert_eq!(map.suppliers[0].zone, RiskMapZone::Yellow);
/// ```
pub fn risk_map(
    supplies: &[SupplyRecord],
    directory: &SupplierDirectory,
    alerts: &[AlertRecord],
) -> SupplierRiskMap {
    RiskMapBuilder::default().build(supplies, directory, alerts)
}
