use std::fmt;

use serde::{Deserialize, Serialize};

/// Deterministic shard identifier derived from entry content.
///
/// A `BucketKey` names one shard of the secondary index. Many entries may
/// share a bucket; the key is always a pure function of the entry content,
/// so any node can recompute which bucket an entry belongs to without
/// consulting the index.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketKey(String);

impl BucketKey {
    /// Create a bucket key from a string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the key is the empty string.
    ///
    /// An empty key is never produced by a well-formed policy; index
    /// implementations reject it.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BucketKey({:?})", self.0)
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BucketKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BucketKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}
