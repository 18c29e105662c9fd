// Single source of truth for all default values.

// --- Trust ---
pub const DEFAULT_REJECTED_PENALTY: u32 = 20;
pub const DEFAULT_WARNING_PENALTY: u32 = 8;
pub const DEFAULT_FLAG_PENALTY: u32 = 2;
pub const DEFAULT_FAKE_PENALTY: u32 = 25;
pub const DEFAULT_SAFE_THRESHOLD: u32 = 80;
pub const DEFAULT_MODERATE_THRESHOLD: u32 = 60;
pub const DEFAULT_TRUST_BOTTOM_N: usize = 5;

// --- Zones ---
pub const DEFAULT_ZONE_TOP_N: usize = 10;

// --- Priority ---
pub const DEFAULT_USE_IMMEDIATELY_DAYS: i64 = 7;
pub const DEFAULT_USE_SOON_DAYS: i64 = 30;
pub const DEFAULT_HOLD_DAYS: i64 = 60;
pub const DEFAULT_EXPIRY_HORIZON_DAYS: i64 = 30;
pub const DEFAULT_EXPIRY_WEIGHT: u64 = 2;
pub const DEFAULT_QUANTITY_DIVISOR: u64 = 5;
pub const DEFAULT_RISK_FLAG_WEIGHT: u64 = 10;
pub const DEFAULT_PRIORITY_CEILING: u64 = 100;

// --- Dashboard ---
pub const DEFAULT_NEAR_EXPIRY_WINDOW_DAYS: i64 = 30;

// --- Supplier risk map ---
pub const DEFAULT_MAP_REJECTED_PENALTY: u64 = 5;
pub const DEFAULT_MAP_FAKE_PENALTY: u64 = 10;
pub const DEFAULT_MAP_SUSPICIOUS_PENALTY: u64 = 5;
pub const DEFAULT_MAP_FLAGGED_PENALTY: u64 = 3;
pub const DEFAULT_MAP_BLACKLIST_PENALTY: u64 = 20;
pub const DEFAULT_MAP_HIGH_ALERT_PENALTY: u64 = 4;
pub const DEFAULT_MAP_ALERT_PENALTY: u64 = 2;
pub const DEFAULT_MAP_RED_THRESHOLD: u64 = 40;
pub const DEFAULT_MAP_YELLOW_THRESHOLD: u64 = 20;

// --- Corruption patterns ---
pub const DEFAULT_FAVORITISM_MIN_APPROVALS: usize = 20;
pub const DEFAULT_FAVORITISM_RATIO: usize = 2;
pub const DEFAULT_REPEATED_BATCH_THRESHOLD: usize = 5;
pub const DEFAULT_TARGETED_REJECTION_COUNT: usize = 15;
pub const DEFAULT_TARGETED_MIN_DECISIONS: usize = 10;
pub const DEFAULT_TARGETED_REJECTION_RATE_PCT: usize = 80;
pub const DEFAULT_BIAS_MIN_DECISIONS: usize = 10;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
