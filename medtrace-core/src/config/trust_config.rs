//! Configuration for supplier trust scoring.
//!
//! # Examples
//!
//! ```
//! use medtrace_core::config::TrustConfig;
//!
//! let config = TrustConfig::default();
//! assert_eq!(config.rejected_penalty, 20);
//! assert_eq!(config.safe_threshold, 80);
//! assert_eq!(config.bottom_n, 5);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_TRUST_SCORE;
use crate::errors::ConfigError;

/// Penalty weights, label cut points and the size of the bottom-N view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    /// Penalty per REJECTED supply. Default: 20.
    pub rejected_penalty: u32,
    /// Penalty per supply carrying at least one risk flag. Default: 8.
    pub warning_penalty: u32,
    /// Penalty per individual risk flag. Default: 2.
    pub flag_penalty: u32,
    /// Penalty per SUSPICIOUS or FAKE supply. Default: 25.
    pub fake_penalty: u32,
    /// Lowest score labelled SAFE. Default: 80.
    pub safe_threshold: u32,
    /// Lowest score labelled MODERATE. Default: 60.
    pub moderate_threshold: u32,
    /// Number of lowest-scoring suppliers in the ranked view. Default: 5.
    pub bottom_n: usize,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            rejected_penalty: defaults::DEFAULT_REJECTED_PENALTY,
            warning_penalty: defaults::DEFAULT_WARNING_PENALTY,
            flag_penalty: defaults::DEFAULT_FLAG_PENALTY,
            fake_penalty: defaults::DEFAULT_FAKE_PENALTY,
            safe_threshold: defaults::DEFAULT_SAFE_THRESHOLD,
            moderate_threshold: defaults::DEFAULT_MODERATE_THRESHOLD,
            bottom_n: defaults::DEFAULT_TRUST_BOTTOM_N,
        }
    }
}

impl TrustConfig {
    /// Check that the label bands are ordered and inside the score range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.safe_threshold > MAX_TRUST_SCORE {
            return Err(ConfigError::InvalidThreshold {
                name: "trust.safe_threshold".into(),
                reason: format!("{} exceeds {MAX_TRUST_SCORE}", self.safe_threshold),
            });
        }
        if self.moderate_threshold > self.safe_threshold {
            return Err(ConfigError::InvalidThreshold {
                name: "trust.moderate_threshold".into(),
                reason: format!(
                    "{} is above safe_threshold {}",
                    self.moderate_threshold, self.safe_threshold
                ),
            });
        }
        Ok(())
    }
}
