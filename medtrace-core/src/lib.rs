//! # medtrace-core
//!
//! Foundation crate for the medtrace risk engine.
//! Defines the record and derived models, config, errors, constants,
//! aggregator traits and the lenient JSON ingestion layer.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MedtraceConfig;
pub use errors::{MedtraceError, MedtraceResult, RecordError};
pub use ingest::IngestBatch;
pub use models::{
    AlertRecord, ComplianceStatus, FakeStatus, Recommendation, Severity, SupplierDirectory,
    SupplierId, SupplyRecord,
};
