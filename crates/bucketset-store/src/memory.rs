use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use bucketset_types::{Address, Entry};

use crate::error::StoreResult;
use crate::traits::EntryStore;

/// In-memory, HashMap-based entry store.
///
/// Models one writer's local replica of the distributed store. All entries
/// are held in memory behind a `RwLock` for safe concurrent access; entries
/// are cloned on read/write. The lock is only held inside each method body,
/// never across an await point.
pub struct InMemoryEntryStore {
    entries: RwLock<HashMap<Address, Entry>>,
}

impl InMemoryEntryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Return a sorted list of all addresses in the store.
    pub fn all_addresses(&self) -> Vec<Address> {
        let map = self.entries.read().expect("lock poisoned");
        let mut addresses: Vec<Address> = map.keys().copied().collect();
        addresses.sort();
        addresses
    }

    /// Remove an entry. Intended for divergence tests only: a production
    /// store has no delete operation in this scope.
    pub fn forget(&self, address: &Address) -> bool {
        self.entries
            .write()
            .expect("lock poisoned")
            .remove(address)
            .is_some()
    }

    /// Copy every entry known to `other` into this replica.
    ///
    /// Models asynchronous propagation between writers. Idempotent and
    /// commutative: entries are keyed by content hash, so repeated or
    /// reordered merges converge to the same state.
    pub fn merge_from(&self, other: &InMemoryEntryStore) {
        let theirs = other.entries.read().expect("lock poisoned");
        let mut ours = self.entries.write().expect("lock poisoned");
        for (address, entry) in theirs.iter() {
            ours.entry(*address).or_insert_with(|| entry.clone());
        }
    }
}

impl Default for InMemoryEntryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn put(&self, entry: &Entry) -> StoreResult<Address> {
        let address = entry.address();
        let mut map = self.entries.write().expect("lock poisoned");
        // Idempotent: if already present, skip (content-addressing guarantees
        // the same address always maps to the same content).
        map.entry(address).or_insert_with(|| entry.clone());
        Ok(address)
    }

    async fn get(&self, address: &Address) -> StoreResult<Option<Entry>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(address).cloned())
    }

    async fn exists(&self, address: &Address) -> StoreResult<bool> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.contains_key(address))
    }
}

impl std::fmt::Debug for InMemoryEntryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEntryStore")
            .field("entry_count", &self.len())
            .finish()
    }
}
