//! Foundation types for bucketset.
//!
//! This crate provides the core identity and payload types used throughout
//! the bucketset system. Every other bucketset crate depends on
//! `bucketset-types`.
//!
//! # Key Types
//!
//! - [`Address`] — Content-addressed identifier (BLAKE3 hash)
//! - [`BucketKey`] — Deterministic shard identifier derived from entry content
//! - [`Entry`] — The immutable payload record stored and indexed
//! - [`ContentHasher`] — Domain-separated BLAKE3 hasher

pub mod address;
pub mod bucket;
pub mod entry;
pub mod error;
pub mod hash;

pub use address::Address;
pub use bucket::BucketKey;
pub use entry::Entry;
pub use error::TypeError;
pub use hash::ContentHasher;
