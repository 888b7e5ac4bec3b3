use thiserror::Error;

/// Errors from entry store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend cannot be reached. Transient; callers may retry because
    /// writes are idempotent.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Serialization or deserialization failure in the backend.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
