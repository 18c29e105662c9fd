use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::supplier::SupplierId;

/// Outcome of the upstream acceptance check for one supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ComplianceStatus {
    Accepted,
    Rejected,
    Warning,
    Pending,
}

impl ComplianceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Warning => "WARNING",
            Self::Pending => "PENDING",
        }
    }

    /// Parse the wire string. Case-insensitive; surrounding whitespace ignored.
    /// Older records spell acceptance `APPROVED`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ACCEPTED" | "APPROVED" => Some(Self::Accepted),
            "REJECTED" => Some(Self::Rejected),
            "WARNING" => Some(Self::Warning),
            "PENDING" => Some(Self::Pending),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counterfeit verdict from the external scan service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum FakeStatus {
    None,
    Suspicious,
    Fake,
}

impl FakeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Suspicious => "SUSPICIOUS",
            Self::Fake => "FAKE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "NONE" => Some(Self::None),
            "SUSPICIOUS" => Some(Self::Suspicious),
            "FAKE" => Some(Self::Fake),
            _ => None,
        }
    }

    /// SUSPICIOUS and FAKE both count against the supplier.
    pub fn is_counterfeit_signal(self) -> bool {
        matches!(self, Self::Suspicious | Self::Fake)
    }
}

/// A single delivered batch as listed by the supplies endpoint.
///
/// Optional fields model data the backend may omit; absence is always the
/// neutral case (no flags, no verdict, no known expiry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplyRecord {
    pub id: String,
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
    pub compliance_status: ComplianceStatus,
    #[serde(default)]
    pub risk_flags: Vec<String>,
    #[serde(default)]
    pub fake_status: Option<FakeStatus>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub medicine_id: Option<String>,
    #[serde(default)]
    pub batch_number: Option<String>,
}

impl SupplyRecord {
    /// A record with only the required fields set.
    pub fn new(id: impl Into<String>, compliance_status: ComplianceStatus) -> Self {
        Self {
            id: id.into(),
            supplier_id: None,
            compliance_status,
            risk_flags: Vec::new(),
            fake_status: None,
            expiry_date: None,
            quantity: 0,
            temperature: None,
            medicine_id: None,
            batch_number: None,
        }
    }

    pub fn with_supplier(mut self, supplier_id: impl Into<SupplierId>) -> Self {
        self.supplier_id = Some(supplier_id.into());
        self
    }

    pub fn with_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.risk_flags = flags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fake_status(mut self, status: FakeStatus) -> Self {
        self.fake_status = Some(status);
        self
    }

    pub fn with_expiry(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_batch(mut self, batch_number: impl Into<String>) -> Self {
        self.batch_number = Some(batch_number.into());
        self
    }

    /// The owning supplier, if one is set and non-blank.
    pub fn supplier(&self) -> Option<&SupplierId> {
        self.supplier_id.as_ref().filter(|id| !id.is_blank())
    }

    /// The batch number, if present and non-blank.
    pub fn batch(&self) -> Option<&str> {
        self.batch_number
            .as_deref()
            .map(str::trim)
            .filter(|batch| !batch.is_empty())
    }

    pub fn is_flagged(&self) -> bool {
        !self.risk_flags.is_empty()
    }

    pub fn flag_count(&self) -> usize {
        self.risk_flags.len()
    }

    pub fn is_counterfeit_signal(&self) -> bool {
        self.fake_status.is_some_and(FakeStatus::is_counterfeit_signal)
    }

    /// Whole days from `reference` to expiry; negative once expired.
    pub fn days_to_expiry(&self, reference: NaiveDate) -> Option<i64> {
        self.expiry_date
            .map(|expiry| expiry.signed_duration_since(reference).num_days())
    }
}
