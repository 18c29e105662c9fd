use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::UNKNOWN_ZONE_LABEL;

/// Risk-zone rollup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Number of zones kept after sorting by alert count. Default: 10.
    pub top_n: usize,
    /// Label for alerts without a region/area. Default: "Unknown Zone".
    pub unknown_zone_label: String,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            top_n: defaults::DEFAULT_ZONE_TOP_N,
            unknown_zone_label: UNKNOWN_ZONE_LABEL.to_string(),
        }
    }
}
