/// Configuration loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),

    #[error("invalid threshold {name}: {reason}")]
    InvalidThreshold { name: String, reason: String },

    #[error("invalid weight {name}: {reason}")]
    InvalidWeight { name: String, reason: String },
}
