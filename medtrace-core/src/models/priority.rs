use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Usage directive for a supply batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Recommendation {
    Expired,
    UseImmediately,
    UseSoon,
    Normal,
    Hold,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expired => "EXPIRED",
            Self::UseImmediately => "USE_IMMEDIATELY",
            Self::UseSoon => "USE_SOON",
            Self::Normal => "NORMAL",
            Self::Hold => "HOLD",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority view of one supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriorityEntry {
    pub supply_id: String,
    /// `None` when the supply has no usable expiry date.
    pub days_to_expiry: Option<i64>,
    pub priority_score: u64,
    pub recommendation: Recommendation,
    pub risk_flags: Vec<String>,
}
