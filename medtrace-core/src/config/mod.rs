//! Engine configuration, loaded from TOML.
//!
//! Every section is optional; missing sections and fields take the values
//! in [`defaults`].
//!
//! # Examples
//!
//! ```
//! use medtrace_core::config::MedtraceConfig;
//!
//! let config = MedtraceConfig::from_toml("[zones]\ntop_n = 3\n").unwrap();
//! assert_eq!(config.zones.top_n, 3);
//! assert_eq!(config.trust.bottom_n, 5);
//! ```

pub mod corruption_config;
pub mod dashboard_config;
pub mod defaults;
pub mod observability_config;
pub mod priority_config;
pub mod risk_map_config;
pub mod trust_config;
pub mod zone_config;

pub use corruption_config::CorruptionConfig;
pub use dashboard_config::DashboardConfig;
pub use observability_config::ObservabilityConfig;
pub use priority_config::PriorityConfig;
pub use risk_map_config::RiskMapConfig;
pub use trust_config::TrustConfig;
pub use zone_config::ZoneConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, MedtraceResult};

/// Top-level configuration for the risk engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedtraceConfig {
    pub trust: TrustConfig,
    pub zones: ZoneConfig,
    pub priority: PriorityConfig,
    pub dashboard: DashboardConfig,
    pub risk_map: RiskMapConfig,
    pub corruption: CorruptionConfig,
    pub observability: ObservabilityConfig,
}

impl MedtraceConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(input: &str) -> MedtraceResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> MedtraceResult<String> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Validate every section.
    pub fn validate(&self) -> MedtraceResult<()> {
        self.trust.validate()?;
        self.priority.validate()?;
        self.risk_map.validate()?;
        self.corruption.validate()?;
        Ok(())
    }
}
