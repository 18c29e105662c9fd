//! RiskEngine: one configuration, every aggregation pass.
//!
//! The engine is immutable after construction and holds no caches, so a
//! shared reference can serve any number of threads.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::instrument;

use medtrace_core::config::MedtraceConfig;
use medtrace_core::models::{
    AlertRecord, CorruptionReport, DashboardAnalytics, PriorityEntry, Recommendation, Severity,
    SupplierDirectory, SupplierRiskMap, SupplierTrust, SupplyRecord, TrustLabel, ZoneReport,
    ZoneSeverity,
};
use medtrace_core::MedtraceResult;
use medtrace_observability::events;

use crate::corruption::CorruptionDetector;
use crate::dashboard::build_dashboard;
use crate::priority::{urgent_first, PriorityRanker};
use crate::risk_map::RiskMapBuilder;
use crate::snapshot::Snapshot;
use crate::trust::TrustScorer;
use crate::zones::ZoneAggregator;

/// Facade over every aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: MedtraceConfig,
    trust: TrustScorer,
    zones: ZoneAggregator,
    priority: PriorityRanker,
    risk_map: RiskMapBuilder,
    corruption: CorruptionDetector,
}

impl RiskEngine {
    /// Create an engine from an already validated configuration.
    pub fn new(config: &MedtraceConfig) -> Self {
        Self {
            config: config.clone(),
            trust: TrustScorer::new(&config.trust),
            zones: ZoneAggregator::new(&config.zones),
            priority: PriorityRanker::new(&config.priority),
            risk_map: RiskMapBuilder::new(&config.risk_map),
            corruption: CorruptionDetector::new(&config.corruption),
        }
    }

    /// Parse, validate and build.
    pub fn from_toml(input: &str) -> MedtraceResult<Self> {
        Ok(Self::new(&MedtraceConfig::from_toml(input)?))
    }

    pub fn config(&self) -> &MedtraceConfig {
        &self.config
    }

    /// Typed snapshot from raw listings. Malformed and soft-deleted records are skipped.
    #[instrument(skip_all, fields(supplies = supplies.len(), suppliers = suppliers.len(), alerts = alerts.len()))]
    pub fn ingest(&self, supplies: &[Value], suppliers: &[Value], alerts: &[Value]) -> Snapshot {
        Snapshot::from_values(supplies, suppliers, alerts)
    }

    /// Bottom-N suppliers, worst first.
    #[instrument(skip_all, fields(supplies = supplies.len()))]
    pub fn trust_scores(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
    ) -> Vec<SupplierTrust> {
        let all = self.trust.compute_all(supplies, directory);
        let suppliers = all.len();
        let at_risk = all.iter().filter(|t| t.label == TrustLabel::Risk).count();
        let ranked = self.trust.rank_bottom(all);
        events::trust_scores_computed(suppliers, ranked.len(), at_risk);
        ranked
    }

    /// Every supplier, in supplier-id order.
    #[instrument(skip_all, fields(supplies = supplies.len()))]
    pub fn all_trust_scores(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
    ) -> Vec<SupplierTrust> {
        let all = self.trust.compute_all(supplies, directory);
        let at_risk = all.iter().filter(|t| t.label == TrustLabel::Risk).count();
        events::trust_scores_computed(all.len(), all.len(), at_risk);
        all
    }

    #[instrument(skip_all, fields(alerts = alerts.len()))]
    pub fn risk_zones(&self, alerts: &[AlertRecord]) -> ZoneReport {
        let report = self.zones.aggregate_zones(alerts);
        let critical = report
            .zones
            .iter()
            .filter(|z| z.severity == ZoneSeverity::Critical)
            .count();
        events::zones_aggregated(report.summary.total_alerts, report.zones.len(), critical);
        report
    }

    /// Per-supply priority, input order preserved.
    #[instrument(skip_all, fields(supplies = supplies.len(), reference_date = %reference_date))]
    pub fn usage_priority(
        &self,
        supplies: &[SupplyRecord],
        reference_date: NaiveDate,
    ) -> Vec<PriorityEntry> {
        let entries = self.priority.rank_priority(supplies, reference_date);
        let expired = entries
            .iter()
            .filter(|e| e.recommendation == Recommendation::Expired)
            .count();
        let undated = entries.iter().filter(|e| e.days_to_expiry.is_none()).count();
        events::priority_ranked(entries.len(), expired, undated);
        entries
    }

    /// Per-supply priority, most urgent first.
    pub fn urgent_priority(
        &self,
        supplies: &[SupplyRecord],
        reference_date: NaiveDate,
    ) -> Vec<PriorityEntry> {
        urgent_first(&self.usage_priority(supplies, reference_date))
    }

    #[instrument(skip_all, fields(supplies = supplies.len(), reference_date = %reference_date))]
    pub fn dashboard(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
        reference_date: NaiveDate,
    ) -> DashboardAnalytics {
        let analytics = build_dashboard(supplies, directory, reference_date, &self.config.dashboard);
        events::dashboard_built(
            analytics.compliance.total_supplies,
            analytics.near_expiry.len(),
            analytics.supplier_risk.len(),
        );
        analytics
    }

    /// Every supplier with its risk points and map zone, riskiest first.
    #[instrument(skip_all, fields(supplies = supplies.len(), alerts = alerts.len()))]
    pub fn risk_map(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
        alerts: &[AlertRecord],
    ) -> SupplierRiskMap {
        let map = self.risk_map.build(supplies, directory, alerts);
        events::risk_map_built(map.total_suppliers, map.high_risk, map.medium_risk);
        map
    }

    #[instrument(skip_all, fields(supplies = supplies.len()))]
    pub fn corruption_patterns(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
    ) -> CorruptionReport {
        let report = self.corruption.detect(supplies, directory);
        let critical = report
            .flags
            .iter()
            .filter(|f| f.severity == Severity::Critical)
            .count();
        events::corruption_scanned(report.summary.total_suppliers, report.total_flags, critical);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_is_send_and_sync() {
        assert_send_sync::<RiskEngine>();
    }

    #[test]
    fn from_toml_applies_sections() {
        let engine = RiskEngine::from_toml("[trust]\nbottom_n = 2\n[zones]\ntop_n = 1\n").unwrap();
        assert_eq!(engine.config().trust.bottom_n, 2);
        assert_eq!(engine.config().zones.top_n, 1);
        assert_eq!(engine.config().priority, Default::default());
        assert_eq!(engine.config().risk_map, Default::default());
    }

    #[test]
    fn trust_scores_match_the_scorer_ranking() {
        use medtrace_core::models::ComplianceStatus;

        let engine = RiskEngine::from_toml("[trust]\nbottom_n = 2\n").unwrap();
        let supplies: Vec<SupplyRecord> = ["S3", "S1", "S2", "S1"]
            .iter()
            .enumerate()
            .map(|(i, supplier)| {
                SupplyRecord::new(i.to_string(), ComplianceStatus::Rejected).with_supplier(*supplier)
            })
            .collect();
        let directory = SupplierDirectory::new();
        let scorer = TrustScorer::new(&engine.config().trust);
        let ranked = engine.trust_scores(&supplies, &directory);
        assert_eq!(ranked, scorer.compute_trust_scores(&supplies, &directory));
        let ids: Vec<&str> = ranked.iter().map(|t| t.supplier_id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2"]);
    }

    #[test]
    fn from_toml_rejects_invalid_thresholds() {
        assert!(RiskEngine::from_toml("[trust]\nsafe_threshold = 50\nmoderate_threshold = 70\n").is_err());
        assert!(RiskEngine::from_toml("[risk_map]\nred_threshold = 10\n").is_err());
        assert!(RiskEngine::from_toml("[corruption]\ntargeted_rejection_rate_pct = 120\n").is_err());
    }
}
