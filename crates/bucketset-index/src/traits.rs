use async_trait::async_trait;

use bucketset_types::{Address, BucketKey};

use crate::error::IndexResult;

/// Bucket-sharded index: one append-only address collection per bucket key.
///
/// All implementations must satisfy these invariants:
/// - `append` creates the bucket lazily on first use and is idempotent:
///   appending the same (key, address) pair twice leaves one membership.
/// - Collections only grow; there is no remove within scope.
/// - `list` reflects the writes committed on this replica at call time.
///   Under eventual consistency a concurrent write elsewhere may not be
///   visible yet.
///
/// Every operation is async: in a deployed system each call may suspend on
/// the distributed index backend.
#[async_trait]
pub trait BucketIndex: Send + Sync {
    /// Add an address to the collection for `key`, creating the collection
    /// if absent. Returns `true` if the address was newly added.
    async fn append(&self, key: &BucketKey, address: Address) -> IndexResult<bool>;

    /// All addresses appended under `key`, in local arrival order.
    ///
    /// A key that has never received a write yields an empty vector, not an
    /// error.
    async fn list(&self, key: &BucketKey) -> IndexResult<Vec<Address>>;

    /// All bucket keys holding at least one address, sorted.
    async fn bucket_keys(&self) -> IndexResult<Vec<BucketKey>>;
}

/// Global index: a single append-only collection of every committed address.
///
/// Kept separate from the bucket index so that a full listing needs no
/// enumeration of bucket keys — a small amount of duplicated bookkeeping
/// buys O(1) discovery of the complete entry set.
#[async_trait]
pub trait GlobalIndex: Send + Sync {
    /// Add an address to the all-entries collection, idempotently.
    /// Returns `true` if the address was newly added.
    async fn append(&self, address: Address) -> IndexResult<bool>;

    /// Every address committed so far, in local arrival order.
    async fn list_all(&self) -> IndexResult<Vec<Address>>;
}
