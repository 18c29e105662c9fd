/// medtrace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name used when a supplier id has no directory entry.
pub const UNKNOWN_SUPPLIER_NAME: &str = "Unknown";

/// Zone label used when an alert carries no region/area.
pub const UNKNOWN_ZONE_LABEL: &str = "Unknown Zone";

/// Lowest possible trust score.
pub const MIN_TRUST_SCORE: u32 = 0;

/// Highest possible trust score; also the score of a supplier with no findings.
pub const MAX_TRUST_SCORE: u32 = 100;
