use thiserror::Error;

/// Errors from index operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// An append was attempted under the empty bucket key. Well-formed
    /// policies never produce one.
    #[error("empty bucket key")]
    EmptyKey,

    /// Failure in the underlying index backend.
    #[error("index backend error: {0}")]
    Backend(String),
}

/// Result alias for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
