use crate::models::{SupplierDirectory, SupplierTrust, SupplyRecord};

/// Supplier trust scoring.
pub trait ITrustScorer: Send + Sync {
    /// Trust for every supplier seen in `supplies`, in supplier-id order.
    fn score_all(&self, supplies: &[SupplyRecord], directory: &SupplierDirectory)
        -> Vec<SupplierTrust>;

    /// The lowest-scoring suppliers, worst first.
    fn bottom(&self, supplies: &[SupplyRecord], directory: &SupplierDirectory)
        -> Vec<SupplierTrust>;
}
