//! Thresholds for corruption-pattern detection.
//!
//! "Decisions" are a supplier's approvals plus rejections; pending and
//! warning supplies count toward neither.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorruptionConfig {
    /// Favoritism needs more approvals than this. Default: 20.
    pub favoritism_min_approvals: usize,
    /// ...and more than this multiple of the per-supplier average. Default: 2.
    pub favoritism_ratio: usize,
    /// A batch number seen more often than this is flagged. Default: 5.
    pub repeated_batch_threshold: usize,
    /// More rejections than this is targeted rejection outright. Default: 15.
    pub targeted_rejection_count: usize,
    /// Minimum decisions (exclusive) before the rejection rate is judged. Default: 10.
    pub targeted_min_decisions: usize,
    /// Rejection rate, in percent, that must be exceeded. Default: 80.
    pub targeted_rejection_rate_pct: usize,
    /// Minimum decisions (exclusive) for a zero-rejection record to be flagged. Default: 10.
    pub bias_min_decisions: usize,
}

impl Default for CorruptionConfig {
    fn default() -> Self {
        Self {
            favoritism_min_approvals: defaults::DEFAULT_FAVORITISM_MIN_APPROVALS,
            favoritism_ratio: defaults::DEFAULT_FAVORITISM_RATIO,
            repeated_batch_threshold: defaults::DEFAULT_REPEATED_BATCH_THRESHOLD,
            targeted_rejection_count: defaults::DEFAULT_TARGETED_REJECTION_COUNT,
            targeted_min_decisions: defaults::DEFAULT_TARGETED_MIN_DECISIONS,
            targeted_rejection_rate_pct: defaults::DEFAULT_TARGETED_REJECTION_RATE_PCT,
            bias_min_decisions: defaults::DEFAULT_BIAS_MIN_DECISIONS,
        }
    }
}

impl CorruptionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.targeted_rejection_rate_pct > 100 {
            return Err(ConfigError::InvalidThreshold {
                name: "corruption.targeted_rejection_rate_pct".into(),
                reason: format!("{} exceeds 100", self.targeted_rejection_rate_pct),
            });
        }
        if self.favoritism_ratio == 0 {
            return Err(ConfigError::InvalidWeight {
                name: "corruption.favoritism_ratio".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CorruptionConfig::default().validate().is_ok());
    }

    #[test]
    fn rate_above_100_and_zero_ratio_are_rejected() {
        let config = CorruptionConfig {
            targeted_rejection_rate_pct: 101,
            ..CorruptionConfig::default()
        };
        assert!(config.validate().is_err());
        let config = CorruptionConfig {
            favoritism_ratio: 0,
            ..CorruptionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeight { .. })
        ));
    }
}
