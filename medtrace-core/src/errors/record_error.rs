/// Why a raw record was rejected during ingestion.
///
/// These never abort a batch: the record is skipped and the error is kept
/// alongside its index in [`crate::ingest::IngestBatch::skipped`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("{kind} record is not a JSON object")]
    NotAnObject { kind: &'static str },

    #[error("{kind} record is missing required field `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("{kind} record has invalid `{field}`: {value}")]
    InvalidValue {
        kind: &'static str,
        field: &'static str,
        value: String,
    },
}
