pub mod alert;
pub mod corruption;
pub mod dashboard;
pub mod priority;
pub mod risk_map;
pub mod supplier;
pub mod supply;
pub mod trust;
pub mod zone;

pub use alert::{AlertRecord, Severity};
pub use corruption::{CorruptionFlag, CorruptionKind, CorruptionReport, CorruptionSummary};
pub use dashboard::{ComplianceOverview, DashboardAnalytics, NearExpiryEntry, SupplierRisk};
pub use priority::{PriorityEntry, Recommendation};
pub use risk_map::{RiskMapZone, SupplierRiskMap, SupplierRiskPoint};
pub use supplier::{SupplierDirectory, SupplierEntry, SupplierId};
pub use supply::{ComplianceStatus, FakeStatus, SupplyRecord};
pub use trust::{SupplierTrust, TrustLabel};
pub use zone::{AlertSummary, RiskZone, ZoneReport, ZoneSeverity};
