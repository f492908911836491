use thiserror::Error;

/// Failures surfaced by the local record store
///
/// Corrupt persisted data is deliberately NOT an error: a collection that
/// fails to parse is read back as empty so a page never crashes on it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `update` targeted an identifier that is not in the collection.
    #[error("no {entity} record with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The underlying key-value storage cannot be reached at all.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Writing a collection back failed (quota, disabled storage, ...).
    #[error("failed to persist collection: {0}")]
    WriteFailed(String),

    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures of the external prediction call
///
/// The three variants are user-visible conditions the prediction page must
/// keep apart: service down, service-side error payload, unusable body.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("prediction service unreachable: {0}")]
    Unreachable(String),

    #[error("prediction service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("malformed prediction response: {0}")]
    InvalidResponse(String),
}
