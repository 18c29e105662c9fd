//! Typed input snapshot built from raw JSON listings.

use serde_json::Value;

use medtrace_core::ingest::{self, SkippedRecord};
use medtrace_core::models::{AlertRecord, SupplierDirectory, SupplyRecord};
use medtrace_core::MedtraceResult;

/// One consistent set of inputs for the aggregators.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub supplies: Vec<SupplyRecord>,
    pub directory: SupplierDirectory,
    pub alerts: Vec<AlertRecord>,
    /// Dropped records, keyed by listing kind.
    pub skipped: Vec<(&'static str, SkippedRecord)>,
    /// Soft-deleted documents left out across all listings.
    pub deleted: usize,
}

impl Snapshot {
    /// Parse the three listings, skipping malformed and soft-deleted records.
    pub fn from_values(supplies: &[Value], suppliers: &[Value], alerts: &[Value]) -> Self {
        let mut snapshot = Self::default();

        let batch = ingest::ingest_supplies(supplies);
        snapshot.note_skipped("supply", batch.skipped, batch.records.len());
        snapshot.deleted += batch.deleted;
        snapshot.supplies = batch.records;

        let batch = ingest::ingest_suppliers(suppliers);
        snapshot.note_skipped("supplier", batch.skipped, batch.records.len());
        snapshot.deleted += batch.deleted;
        snapshot.directory = batch.records.into_iter().collect();

        let batch = ingest::ingest_alerts(alerts);
        snapshot.note_skipped("alert", batch.skipped, batch.records.len());
        snapshot.deleted += batch.deleted;
        snapshot.alerts = batch.records;

        snapshot
    }

    /// Parse response bodies. Alerts may be wrapped as `{"alerts": [...]}`.
    pub fn from_json_strs(supplies: &str, suppliers: &str, alerts: &str) -> MedtraceResult<Self> {
        let supplies = ingest::collection_from_json_str(supplies, "supplies")?;
        let suppliers = ingest::collection_from_json_str(suppliers, "suppliers")?;
        let alerts = ingest::collection_from_json_str(alerts, "alerts")?;
        Ok(Self::from_values(&supplies, &suppliers, &alerts))
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn note_skipped(&mut self, kind: &'static str, skipped: Vec<SkippedRecord>, accepted: usize) {
        if skipped.is_empty() {
            return;
        }
        medtrace_observability::events::records_skipped(kind, skipped.len(), accepted);
        self.skipped
            .extend(skipped.into_iter().map(|record| (kind, record)));
    }
}
