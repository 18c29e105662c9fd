//! Ingestion of raw JSON listings into typed records.
//!
//! A malformed record never fails the batch: it is skipped, logged at
//! `warn`, and reported in [`IngestBatch::skipped`] with its position.
//! Soft-deleted documents (`"is_deleted": true`) are not malformed; they are
//! dropped before parsing and only counted in [`IngestBatch::deleted`].
//!
//! ```
//! use medtrace_core::ingest::ingest_supplies;
//! use serde_json::json;
//!
//! let batch = ingest_supplies(&[
//!     json!({"id": "1", "supplier_id": "S1", "compliance_status": "ACCEPTED"}),
//!     json!({"id": "2"}),
//! ]);
//! assert_eq!(batch.records.len(), 1);
//! assert_eq!(batch.skipped[0].index, 1);
//! ```

mod fields;
pub mod alert;
pub mod supplier;
pub mod supply;

pub use alert::parse_alert;
pub use supplier::parse_supplier;
pub use supply::parse_supply;

use serde_json::Value;

use crate::errors::{MedtraceResult, RecordError};
use crate::models::{AlertRecord, SupplierDirectory, SupplierEntry, SupplyRecord};

/// A record that was dropped during ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position in the input listing.
    pub index: usize,
    pub error: RecordError,
}

/// Parsed records plus the ones that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestBatch<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
    /// Soft-deleted documents left out of `records`.
    pub deleted: usize,
}

impl<T> Default for IngestBatch<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            deleted: 0,
        }
    }
}

impl<T> IngestBatch<T> {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

fn ingest_with<T>(
    values: &[Value],
    kind: &'static str,
    parse: impl Fn(&Value) -> Result<T, RecordError>,
) -> IngestBatch<T> {
    let mut batch = IngestBatch::default();
    for (index, value) in values.iter().enumerate() {
        if fields::is_soft_deleted(value) {
            tracing::debug!(event = "record_soft_deleted", kind, index);
            batch.deleted += 1;
            continue;
        }
        match parse(value) {
            Ok(record) => batch.records.push(record),
            Err(error) => {
                tracing::warn!(
                    event = "record_skipped",
                    kind,
                    index,
                    reason = %error,
                    "skipping malformed record"
                );
                batch.skipped.push(SkippedRecord { index, error });
            }
        }
    }
    batch
}

pub fn ingest_supplies(values: &[Value]) -> IngestBatch<SupplyRecord> {
    ingest_with(values, "supply", parse_supply)
}

pub fn ingest_alerts(values: &[Value]) -> IngestBatch<AlertRecord> {
    ingest_with(values, "alert", parse_alert)
}

pub fn ingest_suppliers(values: &[Value]) -> IngestBatch<SupplierEntry> {
    ingest_with(values, "supplier", parse_supplier)
}

/// Build a directory straight from the supplier listing.
pub fn supplier_directory(values: &[Value]) -> SupplierDirectory {
    ingest_suppliers(values).records.into_iter().collect()
}

/// Extract the listing from a response body.
///
/// Accepts either a bare array or an object wrapping the array under `key`
/// (the alerts endpoint answers `{"alerts": [...]}`).
pub fn collection_from_json_str(input: &str, key: &'static str) -> MedtraceResult<Vec<Value>> {
    match serde_json::from_str::<Value>(input)? {
        Value::Array(items) => Ok(items),
        Value::Object(mut obj) => match obj.remove(key) {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(RecordError::InvalidValue {
                kind: "collection",
                field: key,
                value: other.to_string(),
            }
            .into()),
            None => Err(RecordError::MissingField {
                kind: "collection",
                field: key,
            }
            .into()),
        },
        _ => Err(RecordError::NotAnObject { kind: "collection" }.into()),
    }
}
