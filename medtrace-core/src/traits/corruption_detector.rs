use crate::models::{CorruptionReport, SupplierDirectory, SupplyRecord};

/// Approval-pattern screening.
pub trait ICorruptionDetector: Send + Sync {
    fn scan(&self, supplies: &[SupplyRecord], directory: &SupplierDirectory) -> CorruptionReport;
}
