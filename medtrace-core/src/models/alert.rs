use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::UNKNOWN_ZONE_LABEL;

/// Alert severity.
///
/// `Unknown` stands in for any severity string the backend emits that is
/// not one of the four named levels. It ranks below `Low` and is counted in
/// none of the named summary buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Unknown,
}

impl Severity {
    /// Position in the total order `CRITICAL > HIGH > MEDIUM > LOW > UNKNOWN`.
    pub fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// The more severe of two levels. Associative and commutative.
    pub fn max(self, other: Self) -> Self {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse the wire string; anything unrecognized maps to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            "CRITICAL" => Self::Critical,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_zone() -> String {
    UNKNOWN_ZONE_LABEL.to_string()
}

/// An alert raised against a supply, tagged with the zone it was raised in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlertRecord {
    pub id: String,
    pub severity: Severity,
    #[serde(default = "default_zone")]
    pub zone: String,
    #[serde(default)]
    pub medicine_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// The supply this alert was raised against, if known.
    #[serde(default)]
    pub supply_id: Option<String>,
}

impl AlertRecord {
    pub fn new(id: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: id.into(),
            severity,
            zone: default_zone(),
            medicine_name: None,
            created_at: None,
            supply_id: None,
        }
    }

    pub fn for_supply(mut self, supply_id: impl Into<String>) -> Self {
        self.supply_id = Some(supply_id.into());
        self
    }

    pub fn in_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = zone.into();
        self
    }

    pub fn for_medicine(mut self, name: impl Into<String>) -> Self {
        self.medicine_name = Some(name.into());
        self
    }

    /// The medicine name, if present and non-blank.
    pub fn medicine(&self) -> Option<&str> {
        self.medicine_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
