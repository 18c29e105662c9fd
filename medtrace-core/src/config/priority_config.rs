//! Configuration for usage-priority ranking.
//!
//! Day bands are half-open: a supply with `days` to expiry falls in
//! `[lower, upper)`. The score weights are policy, not law; every weight
//! here can be changed without touching the ranking logic.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Recommendation bands and priority score weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityConfig {
    /// Upper bound (exclusive) of the USE_IMMEDIATELY band. Default: 7.
    pub use_immediately_days: i64,
    /// Upper bound (exclusive) of the USE_SOON band. Default: 30.
    pub use_soon_days: i64,
    /// Lower bound (inclusive) of the band where flagged supplies are held. Default: 60.
    pub hold_days: i64,
    /// Days before expiry at which the expiry term starts contributing. Default: 30.
    pub expiry_horizon_days: i64,
    /// Score per day inside the expiry horizon. Default: 2.
    pub expiry_weight: u64,
    /// Quantity units per score point. Default: 5.
    pub quantity_divisor: u64,
    /// Score per risk flag. Default: 10.
    pub risk_flag_weight: u64,
    /// Maximum priority score. Default: 100.
    pub score_ceiling: u64,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            use_immediately_days: defaults::DEFAULT_USE_IMMEDIATELY_DAYS,
            use_soon_days: defaults::DEFAULT_USE_SOON_DAYS,
            hold_days: defaults::DEFAULT_HOLD_DAYS,
            expiry_horizon_days: defaults::DEFAULT_EXPIRY_HORIZON_DAYS,
            expiry_weight: defaults::DEFAULT_EXPIRY_WEIGHT,
            quantity_divisor: defaults::DEFAULT_QUANTITY_DIVISOR,
            risk_flag_weight: defaults::DEFAULT_RISK_FLAG_WEIGHT,
            score_ceiling: defaults::DEFAULT_PRIORITY_CEILING,
        }
    }
}

impl PriorityConfig {
    /// Check band ordering and that the quantity divisor is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = 0 <= self.use_immediately_days
            && self.use_immediately_days <= self.use_soon_days
            && self.use_soon_days <= self.hold_days;
        if !ordered {
            return Err(ConfigError::InvalidThreshold {
                name: "priority bands".into(),
                reason: format!(
                    "expected 0 <= {} <= {} <= {}",
                    self.use_immediately_days, self.use_soon_days, self.hold_days
                ),
            });
        }
        if self.quantity_divisor == 0 {
            return Err(ConfigError::InvalidWeight {
                name: "priority.quantity_divisor".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.expiry_horizon_days < 0 {
            return Err(ConfigError::InvalidWeight {
                name: "priority.expiry_horizon_days".into(),
                reason: "must not be negative".into(),
            });
        }
        Ok(())
    }
}
