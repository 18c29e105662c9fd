use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::supplier::SupplierId;

/// Qualitative band of a trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum TrustLabel {
    Safe,
    Moderate,
    Risk,
}

impl TrustLabel {
    /// Band a score. Each band includes its lower bound.
    ///
    /// ```
    /// use medtrace_core::models::TrustLabel;
    ///
    /// assert_eq!(TrustLabel::from_score(80, 80, 60), TrustLabel::Safe);
    /// assert_eq!(TrustLabel::from_score(79, 80, 60), TrustLabel::Moderate);
    /// assert_eq!(TrustLabel::from_score(59, 80, 60), TrustLabel::Risk);
    /// ```
    pub fn from_score(score: u32, safe_threshold: u32, moderate_threshold: u32) -> Self {
        if score >= safe_threshold {
            Self::Safe
        } else if score >= moderate_threshold {
            Self::Moderate
        } else {
            Self::Risk
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Moderate => "MODERATE",
            Self::Risk => "RISK",
        }
    }
}

impl std::fmt::Display for TrustLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-supplier trust, recomputed from scratch on every aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierTrust {
    pub supplier_id: SupplierId,
    pub display_name: String,
    /// Always within `[0, 100]`.
    pub score: u32,
    pub label: TrustLabel,
    pub total_supplies: usize,
}
