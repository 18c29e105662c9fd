use crate::models::{AlertRecord, SupplierDirectory, SupplierRiskMap, SupplyRecord};

/// Supplier risk points and map zones.
pub trait IRiskMapBuilder: Send + Sync {
    /// Every known supplier, riskiest first.
    fn build_map(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
        alerts: &[AlertRecord],
    ) -> SupplierRiskMap;
}
