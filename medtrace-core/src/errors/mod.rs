pub mod config_error;
pub mod record_error;

pub use config_error::ConfigError;
pub use record_error::RecordError;

/// Top-level error for the medtrace workspace.
///
/// The aggregators themselves are infallible; only configuration and
/// strict single-record ingestion surface errors to the caller.
#[derive(Debug, thiserror::Error)]
pub enum MedtraceError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("record error: {0}")]
    RecordError(#[from] RecordError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type MedtraceResult<T> = Result<T, MedtraceError>;
