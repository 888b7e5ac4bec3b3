use thiserror::Error;

use bucketset_manager::ManagerError;
use bucketset_protocol::{ApiError, ErrorKind};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Map a manager failure onto the wire-level error payload.
///
/// Every taxonomy member keeps its own kind; in particular divergence is
/// never collapsed into plain not-found.
pub fn api_error(err: &ManagerError) -> ApiError {
    let message = err.to_string();
    match err {
        ManagerError::StoreUnavailable { .. } => ApiError::new(ErrorKind::StoreUnavailable, message),
        ManagerError::Timeout { .. } => ApiError::new(ErrorKind::Timeout, message),
        ManagerError::NotFound(address) => {
            ApiError::new(ErrorKind::NotFound, message).with_address(address.to_hex())
        }
        ManagerError::PartiallyIndexed { address, .. } => {
            ApiError::new(ErrorKind::PartiallyIndexed, message).with_address(address.to_hex())
        }
        ManagerError::Divergence { address, .. } => {
            ApiError::new(ErrorKind::IndexDivergence, message).with_address(address.to_hex())
        }
        // Index backend failures on the read path are transient like store
        // unavailability.
        ManagerError::Index(_) => ApiError::new(ErrorKind::StoreUnavailable, message),
    }
}
