//! Content-addressable entry storage for bucketset.
//!
//! Every entry is stored as an immutable record identified by the BLAKE3
//! hash of its content. The store is the system's source of truth; the
//! indexes hold only addresses (lightweight references), never copies of
//! content.
//!
//! # Design Rules
//!
//! 1. Entries are immutable once written (content-addressing guarantees this).
//! 2. `put` is idempotent: repeated puts of identical content return the
//!    same address without duplicating storage.
//! 3. Concurrent reads are always safe (entries are immutable).
//! 4. The store never interprets entry contents beyond hashing them.
//! 5. All backend errors are propagated, never silently ignored.
//!
//! In a deployed system the backend is a replicated, eventually-consistent
//! distributed store; [`InMemoryEntryStore`] models a single writer's local
//! replica and is the backend used by tests and the bundled server.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryEntryStore;
pub use traits::EntryStore;
