//! Configuration for the supplier risk map.
//!
//! Unlike trust, the risk map accumulates penalty points upward: a higher
//! score is a riskier supplier.
//!
//! # Examples
//!
//! ```
//! use medtrace_core::config::RiskMapConfig;
//!
//! let config = RiskMapConfig::default();
//! assert_eq!(config.blacklist_penalty, 20);
//! assert_eq!(config.red_threshold, 40);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskMapConfig {
    /// Points per REJECTED supply. Default: 5.
    pub rejected_penalty: u64,
    /// Points per FAKE supply. Default: 10.
    pub fake_penalty: u64,
    /// Points per SUSPICIOUS supply. Default: 5.
    pub suspicious_penalty: u64,
    /// Points per supply carrying any risk flag, once per supply. Default: 3.
    pub flagged_penalty: u64,
    /// Points for a blacklisted supplier. Default: 20.
    pub blacklist_penalty: u64,
    /// Points per linked HIGH or CRITICAL alert. Default: 4.
    pub high_alert_penalty: u64,
    /// Points per other linked alert. Default: 2.
    pub alert_penalty: u64,
    /// Scores above this are RED. Default: 40.
    pub red_threshold: u64,
    /// Scores above this (and not RED) are YELLOW. Default: 20.
    pub yellow_threshold: u64,
}

impl Default for RiskMapConfig {
    fn default() -> Self {
        Self {
            rejected_penalty: defaults::DEFAULT_MAP_REJECTED_PENALTY,
            fake_penalty: defaults::DEFAULT_MAP_FAKE_PENALTY,
            suspicious_penalty: defaults::DEFAULT_MAP_SUSPICIOUS_PENALTY,
            flagged_penalty: defaults::DEFAULT_MAP_FLAGGED_PENALTY,
            blacklist_penalty: defaults::DEFAULT_MAP_BLACKLIST_PENALTY,
            high_alert_penalty: defaults::DEFAULT_MAP_HIGH_ALERT_PENALTY,
            alert_penalty: defaults::DEFAULT_MAP_ALERT_PENALTY,
            red_threshold: defaults::DEFAULT_MAP_RED_THRESHOLD,
            yellow_threshold: defaults::DEFAULT_MAP_YELLOW_THRESHOLD,
        }
    }
}

impl RiskMapConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.yellow_threshold > self.red_threshold {
            return Err(ConfigError::InvalidThreshold {
                name: "risk_map.yellow_threshold".into(),
                reason: format!(
                    "{} is above red_threshold {}",
                    self.yellow_threshold, self.red_threshold
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yellow_above_red_is_rejected() {
        let config = RiskMapConfig {
            yellow_threshold: 50,
            ..RiskMapConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { .. })
        ));
        assert!(RiskMapConfig::default().validate().is_ok());
    }
}
