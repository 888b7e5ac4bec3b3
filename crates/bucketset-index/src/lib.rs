//! Index structures for bucketset.
//!
//! Two index families sit next to the content-addressable store:
//!
//! - the **bucket index** shards entry addresses by a deterministic
//!   [`BucketKey`](bucketset_types::BucketKey), so no single index structure
//!   accumulates unbounded size (the "hot base" problem);
//! - the **global index** records every committed address under one
//!   well-known root, so a full listing needs no bucket-key enumeration.
//!
//! Both are append-only, idempotent, and order-independent: membership is a
//! set union over addresses, so replicas receiving the same appends in any
//! order converge to the same observable state.
//!
//! # Key Types
//!
//! - [`AddressSet`] — insertion-ordered, duplicate-free address collection
//!   with a set-union merge rule
//! - [`BucketIndex`] / [`GlobalIndex`] — the async storage traits
//! - [`InMemoryBucketIndex`] / [`InMemoryGlobalIndex`] — single-replica
//!   in-memory implementations with cross-replica merge
//! - [`BucketPolicy`] — the pluggable bucket key derivation rule, with
//!   [`FirstCharPolicy`] (default) and [`HashPrefixPolicy`]

pub mod error;
pub mod memory;
pub mod policy;
pub mod set;
pub mod traits;

pub use error::{IndexError, IndexResult};
pub use memory::{InMemoryBucketIndex, InMemoryGlobalIndex};
pub use policy::{BucketPolicy, FirstCharPolicy, HashPrefixPolicy, EMPTY_CONTENT_BUCKET};
pub use set::AddressSet;
pub use traits::{BucketIndex, GlobalIndex};
