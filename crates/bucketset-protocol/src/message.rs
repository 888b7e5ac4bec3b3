use serde::{Deserialize, Serialize};

use bucketset_types::Entry;

pub const PROTOCOL_VERSION: u32 = 1;

/// Tagged result value returned by every operation.
///
/// Serializes externally tagged: `{"Ok": value}` on success and
/// `{"Err": {...}}` on failure. The tag is the error channel; the carrying
/// transport reports success at its own level for both arms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ApiResponse<T> {
    Ok(T),
    Err(ApiError),
}

impl<T> ApiResponse<T> {
    /// Returns `true` for the `Ok` arm.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

/// The kind of failure, mirroring the manager's error taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The store could not serve the request. Transient; safe to retry.
    StoreUnavailable,
    /// A sub-operation exceeded its timeout budget. Safe to retry.
    Timeout,
    /// The requested address does not resolve in the store.
    NotFound,
    /// The entry was stored but an index append failed; retrying the
    /// create repairs the index.
    PartiallyIndexed,
    /// An indexed address is absent from the store; repair is needed.
    IndexDivergence,
    /// The request itself was malformed (e.g., an unparseable address).
    BadRequest,
}

/// Error payload of the `Err` arm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    /// The address involved, when one is known (hex-encoded).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Input for `create_my_entry`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub entry: Entry,
}

/// Response for the health endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub protocol_version: u32,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            protocol_version: PROTOCOL_VERSION,
        }
    }
}
