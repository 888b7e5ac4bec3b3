//! In-memory index replicas for testing and embedding.
//!
//! [`InMemoryBucketIndex`] and [`InMemoryGlobalIndex`] each model one
//! writer's local replica of the distributed index state. `merge_from`
//! simulates asynchronous propagation between writers: after both replicas
//! merge each other, their memberships are identical.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use bucketset_types::{Address, BucketKey};

use crate::error::{IndexError, IndexResult};
use crate::set::AddressSet;
use crate::traits::{BucketIndex, GlobalIndex};

/// In-memory bucket-sharded index.
///
/// Bucket collections live in a `HashMap` behind a `RwLock`. The lock is
/// only held inside each method body, never across an await point.
#[derive(Debug, Default)]
pub struct InMemoryBucketIndex {
    buckets: RwLock<HashMap<BucketKey, AddressSet>>,
}

impl InMemoryBucketIndex {
    /// Create a new empty bucket index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buckets holding at least one address.
    pub fn bucket_count(&self) -> usize {
        self.buckets.read().expect("lock poisoned").len()
    }

    /// Merge every bucket known to `other` into this replica (set union
    /// per bucket). Idempotent and commutative on membership.
    pub fn merge_from(&self, other: &InMemoryBucketIndex) {
        let theirs = other.buckets.read().expect("lock poisoned");
        let mut ours = self.buckets.write().expect("lock poisoned");
        for (key, set) in theirs.iter() {
            ours.entry(key.clone()).or_default().merge(set);
        }
    }
}

#[async_trait]
impl BucketIndex for InMemoryBucketIndex {
    async fn append(&self, key: &BucketKey, address: Address) -> IndexResult<bool> {
        if key.is_empty() {
            return Err(IndexError::EmptyKey);
        }
        let mut buckets = self.buckets.write().expect("lock poisoned");
        Ok(buckets.entry(key.clone()).or_default().insert(address))
    }

    async fn list(&self, key: &BucketKey) -> IndexResult<Vec<Address>> {
        let buckets = self.buckets.read().expect("lock poisoned");
        Ok(buckets.get(key).map(AddressSet::to_vec).unwrap_or_default())
    }

    async fn bucket_keys(&self) -> IndexResult<Vec<BucketKey>> {
        let buckets = self.buckets.read().expect("lock poisoned");
        let mut keys: Vec<BucketKey> = buckets.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// In-memory global index: one [`AddressSet`] for all committed addresses.
#[derive(Debug, Default)]
pub struct InMemoryGlobalIndex {
    all: RwLock<AddressSet>,
}

impl InMemoryGlobalIndex {
    /// Create a new empty global index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct addresses recorded.
    pub fn len(&self) -> usize {
        self.all.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no address has been recorded.
    pub fn is_empty(&self) -> bool {
        self.all.read().expect("lock poisoned").is_empty()
    }

    /// Merge the membership of `other` into this replica (set union).
    pub fn merge_from(&self, other: &InMemoryGlobalIndex) {
        let theirs = other.all.read().expect("lock poisoned");
        let mut ours = self.all.write().expect("lock poisoned");
        ours.merge(&theirs);
    }
}

#[async_trait]
impl GlobalIndex for InMemoryGlobalIndex {
    async fn append(&self, address: Address) -> IndexResult<bool> {
        let mut all = self.all.write().expect("lock poisoned");
        Ok(all.insert(address))
    }

    async fn list_all(&self) -> IndexResult<Vec<Address>> {
        let all = self.all.read().expect("lock poisoned");
        Ok(all.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u64) -> Address {
        Address::from_bytes(&n.to_le_bytes())
    }

    fn key(s: &str) -> BucketKey {
        BucketKey::new(s)
    }

    // -----------------------------------------------------------------------
    // Bucket index: append/list
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn append_creates_bucket_lazily() {
        let index = InMemoryBucketIndex::new();
        assert_eq!(index.bucket_count(), 0);

        assert!(index.append(&key("s"), addr(1)).await.unwrap());
        assert_eq!(index.bucket_count(), 1);
        assert_eq!(index.list(&key("s")).await.unwrap(), vec![addr(1)]);
    }

    #[tokio::test]
    async fn append_is_idempotent() {
        let index = InMemoryBucketIndex::new();
        assert!(index.append(&key("s"), addr(1)).await.unwrap());
        assert!(!index.append(&key("s"), addr(1)).await.unwrap());
        assert_eq!(index.list(&key("s")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_unknown_bucket_is_empty_not_error() {
        let index = InMemoryBucketIndex::new();
        assert!(index.list(&key("never-used")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn buckets_are_disjoint() {
        let index = InMemoryBucketIndex::new();
        index.append(&key("s"), addr(1)).await.unwrap();
        index.append(&key("m"), addr(2)).await.unwrap();

        assert_eq!(index.list(&key("s")).await.unwrap(), vec![addr(1)]);
        assert_eq!(index.list(&key("m")).await.unwrap(), vec![addr(2)]);
    }

    #[tokio::test]
    async fn empty_key_is_rejected() {
        let index = InMemoryBucketIndex::new();
        let result = index.append(&key(""), addr(1)).await;
        assert!(matches!(result, Err(IndexError::EmptyKey)));
    }

    #[tokio::test]
    async fn bucket_keys_sorted() {
        let index = InMemoryBucketIndex::new();
        index.append(&key("m"), addr(1)).await.unwrap();
        index.append(&key("a"), addr(2)).await.unwrap();
        index.append(&key("s"), addr(3)).await.unwrap();

        let keys = index.bucket_keys().await.unwrap();
        assert_eq!(keys, vec![key("a"), key("m"), key("s")]);
    }

    #[tokio::test]
    async fn list_preserves_arrival_order() {
        let index = InMemoryBucketIndex::new();
        index.append(&key("s"), addr(3)).await.unwrap();
        index.append(&key("s"), addr(1)).await.unwrap();
        index.append(&key("s"), addr(2)).await.unwrap();
        assert_eq!(
            index.list(&key("s")).await.unwrap(),
            vec![addr(3), addr(1), addr(2)]
        );
    }

    // -----------------------------------------------------------------------
    // Bucket index: replica merge
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn bucket_replicas_converge() {
        let alice = InMemoryBucketIndex::new();
        let bob = InMemoryBucketIndex::new();

        alice.append(&key("s"), addr(1)).await.unwrap();
        bob.append(&key("s"), addr(2)).await.unwrap();
        bob.append(&key("m"), addr(3)).await.unwrap();

        alice.merge_from(&bob);
        bob.merge_from(&alice);

        for replica in [&alice, &bob] {
            let mut s = replica.list(&key("s")).await.unwrap();
            s.sort();
            let mut expected = vec![addr(1), addr(2)];
            expected.sort();
            assert_eq!(s, expected);
            assert_eq!(replica.list(&key("m")).await.unwrap(), vec![addr(3)]);
        }
    }

    #[tokio::test]
    async fn bucket_merge_is_idempotent() {
        let alice = InMemoryBucketIndex::new();
        let bob = InMemoryBucketIndex::new();
        bob.append(&key("s"), addr(1)).await.unwrap();

        alice.merge_from(&bob);
        alice.merge_from(&bob);
        assert_eq!(alice.list(&key("s")).await.unwrap().len(), 1);
    }

    // -----------------------------------------------------------------------
    // Global index
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn global_append_and_list_all() {
        let index = InMemoryGlobalIndex::new();
        assert!(index.is_empty());

        assert!(index.append(addr(1)).await.unwrap());
        assert!(index.append(addr(2)).await.unwrap());
        assert_eq!(index.list_all().await.unwrap(), vec![addr(1), addr(2)]);
        assert_eq!(index.len(), 2);
    }

    #[tokio::test]
    async fn global_append_is_idempotent() {
        let index = InMemoryGlobalIndex::new();
        assert!(index.append(addr(1)).await.unwrap());
        assert!(!index.append(addr(1)).await.unwrap());
        assert_eq!(index.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn global_replicas_converge() {
        let alice = InMemoryGlobalIndex::new();
        let bob = InMemoryGlobalIndex::new();
        alice.append(addr(1)).await.unwrap();
        bob.append(addr(2)).await.unwrap();

        alice.merge_from(&bob);
        bob.merge_from(&alice);

        let mut a = alice.list_all().await.unwrap();
        let mut b = bob.list_all().await.unwrap();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }
}
