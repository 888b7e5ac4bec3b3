use std::future::Future;
use std::sync::Arc;

use tokio::time::timeout;
use tracing::{debug, warn};

use bucketset_index::{BucketIndex, BucketPolicy, FirstCharPolicy, GlobalIndex, IndexResult};
use bucketset_store::EntryStore;
use bucketset_types::{Address, BucketKey, Entry};

use crate::config::ManagerConfig;
use crate::error::{IndexStage, ManagerError, ManagerResult};

/// Orchestrates entry creation and retrieval across the store and indexes.
///
/// `create_entry` runs put → derive → bucket append → global append; the
/// read operations resolve index listings back through the store. The
/// manager holds no locks and no state of its own: every sub-operation is
/// idempotent against the backends, so a failed or timed-out composite
/// operation is always safe to retry.
pub struct IndexManager {
    store: Arc<dyn EntryStore>,
    buckets: Arc<dyn BucketIndex>,
    global: Arc<dyn GlobalIndex>,
    policy: Arc<dyn BucketPolicy>,
    config: ManagerConfig,
}

impl IndexManager {
    /// Create a manager over the given backends with the default
    /// first-character bucket policy and default config.
    pub fn new(
        store: Arc<dyn EntryStore>,
        buckets: Arc<dyn BucketIndex>,
        global: Arc<dyn GlobalIndex>,
    ) -> Self {
        Self {
            store,
            buckets,
            global,
            policy: Arc::new(FirstCharPolicy),
            config: ManagerConfig::default(),
        }
    }

    /// Replace the bucket key derivation policy.
    pub fn with_policy(mut self, policy: Arc<dyn BucketPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// The bucket key this manager's policy derives for an entry.
    pub fn derive_bucket(&self, entry: &Entry) -> BucketKey {
        self.policy.derive(entry)
    }

    // ---------------------------------------------------------------
    // Operations
    // ---------------------------------------------------------------

    /// Store an entry and record its address in the bucket and global
    /// indexes. Returns the entry's content-derived address.
    ///
    /// If the store write fails or times out, no index is touched. If an
    /// index append fails after the write succeeded, the result is
    /// [`ManagerError::PartiallyIndexed`] — the entry is durable but may be
    /// invisible to listings until the create is retried.
    pub async fn create_entry(&self, entry: Entry) -> ManagerResult<Address> {
        let address = self
            .bounded("store.put", self.store.put(&entry))
            .await?
            .map_err(|e| ManagerError::StoreUnavailable {
                op: "store.put",
                reason: e.to_string(),
            })?;

        let key = self.policy.derive(&entry);

        let newly_bucketed = self
            .append_step(address, IndexStage::Bucket, self.buckets.append(&key, address))
            .await?;
        let newly_global = self
            .append_step(address, IndexStage::Global, self.global.append(address))
            .await?;

        debug!(
            address = %address.short_hex(),
            bucket = %key,
            newly_bucketed,
            newly_global,
            "entry created"
        );
        Ok(address)
    }

    /// Resolve a single entry by address.
    pub async fn get_entry(&self, address: &Address) -> ManagerResult<Entry> {
        self.bounded("store.get", self.store.get(address))
            .await?
            .map_err(|e| ManagerError::StoreUnavailable {
                op: "store.get",
                reason: e.to_string(),
            })?
            .ok_or(ManagerError::NotFound(*address))
    }

    /// All entries committed under the given bucket key, in local arrival
    /// order. A never-used key yields an empty vector.
    pub async fn get_entries_by_bucket(&self, key: &BucketKey) -> ManagerResult<Vec<Entry>> {
        let addresses = self
            .bounded("bucket_index.list", self.buckets.list(key))
            .await??;
        self.resolve(addresses, Some(key)).await
    }

    /// All entries ever committed, in local arrival order.
    pub async fn get_all_entries(&self) -> ManagerResult<Vec<Entry>> {
        let addresses = self
            .bounded("global_index.list_all", self.global.list_all())
            .await??;
        self.resolve(addresses, None).await
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    /// Run a sub-operation under the configured timeout budget. The outer
    /// error is the timeout; the inner result is the operation's own.
    async fn bounded<T, E, F>(&self, op: &'static str, fut: F) -> ManagerResult<Result<T, E>>
    where
        F: Future<Output = Result<T, E>>,
    {
        timeout(self.config.op_timeout, fut)
            .await
            .map_err(|_| ManagerError::Timeout {
                op,
                after: self.config.op_timeout,
            })
    }

    /// Run an index append after a successful store write. Any failure —
    /// backend error or timeout — is a partial-index condition, reported
    /// distinctly from clean success so the caller knows a retry repairs it.
    async fn append_step<F>(
        &self,
        address: Address,
        stage: IndexStage,
        fut: F,
    ) -> ManagerResult<bool>
    where
        F: Future<Output = IndexResult<bool>>,
    {
        match timeout(self.config.op_timeout, fut).await {
            Ok(Ok(newly_added)) => Ok(newly_added),
            Ok(Err(e)) => Err(ManagerError::PartiallyIndexed {
                address,
                stage,
                reason: e.to_string(),
            }),
            Err(_) => Err(ManagerError::PartiallyIndexed {
                address,
                stage,
                reason: format!("timed out after {:?}", self.config.op_timeout),
            }),
        }
    }

    /// Map index addresses back to entries through the store. An indexed
    /// address missing from the store aborts with a divergence error; it is
    /// never silently dropped or reported as plain not-found.
    async fn resolve(
        &self,
        addresses: Vec<Address>,
        bucket: Option<&BucketKey>,
    ) -> ManagerResult<Vec<Entry>> {
        let found = self
            .bounded("store.get_batch", self.store.get_batch(&addresses))
            .await?
            .map_err(|e| ManagerError::StoreUnavailable {
                op: "store.get_batch",
                reason: e.to_string(),
            })?;

        let mut entries = Vec::with_capacity(addresses.len());
        for (address, maybe_entry) in addresses.into_iter().zip(found) {
            match maybe_entry {
                Some(entry) => entries.push(entry),
                None => {
                    warn!(
                        address = %address.short_hex(),
                        bucket = ?bucket,
                        "indexed address missing from store"
                    );
                    return Err(ManagerError::Divergence {
                        address,
                        bucket: bucket.cloned(),
                    });
                }
            }
        }
        Ok(entries)
    }
}

impl std::fmt::Debug for IndexManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexManager")
            .field("config", &self.config)
            .finish()
    }
}
