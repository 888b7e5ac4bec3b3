//! Request/response shapes for the bucketset external interface.
//!
//! These types define the logical surface of the system independent of any
//! transport. Every response is the externally-tagged [`ApiResponse`] sum —
//! `{"Ok": …}` or `{"Err": …}` — so callers distinguish success from
//! failure by inspecting the tag, never by catching transport faults.

pub mod message;

pub use message::{
    ApiError, ApiResponse, CreateEntryRequest, ErrorKind, HealthResponse, PROTOCOL_VERSION,
};
