use std::fmt;
use std::time::Duration;

use thiserror::Error;

use bucketset_index::IndexError;
use bucketset_types::{Address, BucketKey};

/// Which index a partial write failure occurred in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexStage {
    Bucket,
    Global,
}

impl fmt::Display for IndexStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bucket => write!(f, "bucket index"),
            Self::Global => write!(f, "global index"),
        }
    }
}

/// Failures surfaced by the index manager.
///
/// Every variant names the sub-step that failed, so callers can decide
/// whether a retry is safe. Nothing is swallowed or downgraded: in
/// particular an indexed address missing from the store is [`Divergence`],
/// never [`NotFound`].
///
/// [`Divergence`]: ManagerError::Divergence
/// [`NotFound`]: ManagerError::NotFound
#[derive(Debug, Error)]
pub enum ManagerError {
    /// The store could not serve the named operation. Transient; safe to
    /// retry because writes are idempotent.
    #[error("store unavailable during {op}: {reason}")]
    StoreUnavailable { op: &'static str, reason: String },

    /// The named operation exceeded its timeout budget. Safe to retry.
    #[error("{op} timed out after {after:?}")]
    Timeout { op: &'static str, after: Duration },

    /// The requested address does not resolve in the store. Terminal for
    /// this request, not systemic.
    #[error("entry not found: {0}")]
    NotFound(Address),

    /// The entry was durably stored but an index append failed afterwards.
    /// Distinct from clean success: the entry exists yet may be invisible
    /// to listings. Retrying the create is safe and repairs the index.
    #[error("entry {address} stored but {stage} append failed: {reason}")]
    PartiallyIndexed {
        address: Address,
        stage: IndexStage,
        reason: String,
    },

    /// An address present in an index failed to resolve in the store.
    /// Indicates store/index divergence needing repair.
    #[error(
        "index divergence: {address} indexed{context} but absent from store",
        context = bucket_context(.bucket)
    )]
    Divergence {
        address: Address,
        /// The bucket whose listing exposed the divergence, if any; `None`
        /// when it surfaced through the global index.
        bucket: Option<BucketKey>,
    },

    /// Failure inside an index backend on the read path.
    #[error("index error: {0}")]
    Index(#[from] IndexError),
}

fn bucket_context(bucket: &Option<BucketKey>) -> String {
    match bucket {
        Some(key) => format!(" in bucket {:?}", key.as_str()),
        None => String::new(),
    }
}

/// Result alias for manager operations.
pub type ManagerResult<T> = Result<T, ManagerError>;
