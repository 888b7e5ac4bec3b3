use async_trait::async_trait;

use bucketset_types::{Address, Entry};

use crate::error::StoreResult;

/// Content-addressed entry store.
///
/// All implementations must satisfy these invariants:
/// - Entries are immutable once written. Content-addressing guarantees this:
///   the same content always produces the same address.
/// - `put` is idempotent: repeated puts of identical content return the same
///   address without duplicating storage.
/// - Concurrent reads are always safe (entries are immutable).
/// - All backend errors are propagated, never silently ignored.
///
/// Every operation is async: in a deployed system each call may suspend on
/// network or disk I/O against a replicated backend.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Store an entry and return its content-addressed identity.
    ///
    /// If the entry already exists, this is a no-op returning the same
    /// address.
    async fn put(&self, entry: &Entry) -> StoreResult<Address>;

    /// Read an entry by its address.
    ///
    /// Returns `Ok(None)` if no entry with this address exists.
    /// Returns `Err` on backend failure.
    async fn get(&self, address: &Address) -> StoreResult<Option<Entry>>;

    /// Check whether an entry exists in the store.
    async fn exists(&self, address: &Address) -> StoreResult<bool>;

    /// Read multiple entries in a batch.
    ///
    /// Default implementation calls `get()` for each address. Backends may
    /// override for better performance (e.g., fewer round-trips).
    async fn get_batch(&self, addresses: &[Address]) -> StoreResult<Vec<Option<Entry>>> {
        let mut out = Vec::with_capacity(addresses.len());
        for address in addresses {
            out.push(self.get(address).await?);
        }
        Ok(out)
    }
}
