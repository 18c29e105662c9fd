use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::alert::Severity;
use super::supplier::SupplierId;

/// Kind of approval pattern that looks like corruption.
///
/// Declaration order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum CorruptionKind {
    /// Supplies from a blacklisted supplier were accepted.
    BlacklistAccepted,
    /// One supplier gets far more approvals than the average supplier.
    FavoritismDetected,
    /// The same batch number keeps coming back.
    RepeatedBatchApproval,
    /// One supplier is rejected far more than chance would suggest.
    TargetedRejection,
    /// A supplier with a long record and not a single rejection.
    BiasApprovalPattern,
}

impl CorruptionKind {
    pub fn severity(self) -> Severity {
        match self {
            Self::BlacklistAccepted => Severity::Critical,
            Self::FavoritismDetected => Severity::High,
            Self::RepeatedBatchApproval | Self::TargetedRejection | Self::BiasApprovalPattern => {
                Severity::Medium
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BlacklistAccepted => "BLACKLIST_ACCEPTED",
            Self::FavoritismDetected => "FAVORITISM_DETECTED",
            Self::RepeatedBatchApproval => "REPEATED_BATCH_APPROVAL",
            Self::TargetedRejection => "TARGETED_REJECTION",
            Self::BiasApprovalPattern => "BIAS_APPROVAL_PATTERN",
        }
    }
}

impl std::fmt::Display for CorruptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected pattern, tied to a supplier or to a batch number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CorruptionFlag {
    pub kind: CorruptionKind,
    pub severity: Severity,
    pub supplier_id: Option<SupplierId>,
    pub supplier_name: Option<String>,
    pub batch_number: Option<String>,
    /// The count the pattern fired on: approvals, rejections or batch repeats.
    pub count: usize,
    /// Percent, one decimal. Only set for targeted rejection.
    pub rejection_rate: Option<f64>,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CorruptionSummary {
    /// Suppliers with at least one approval or rejection.
    pub total_suppliers: usize,
    pub total_approvals: usize,
    pub total_rejections: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CorruptionReport {
    pub total_flags: usize,
    pub flags: Vec<CorruptionFlag>,
    pub summary: CorruptionSummary,
}
