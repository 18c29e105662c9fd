use serde::{Deserialize, Serialize};

use super::defaults;

/// Dashboard analytics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Supplies expiring within this many days are listed as near expiry. Default: 30.
    pub near_expiry_window_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            near_expiry_window_days: defaults::DEFAULT_NEAR_EXPIRY_WINDOW_DAYS,
        }
    }
}
