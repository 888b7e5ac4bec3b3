//! Index manager for bucketset.
//!
//! The [`IndexManager`] is the orchestration root of the system. On entry
//! creation it stores the entry, derives its bucket key, and appends the
//! address to both the bucket index and the global index; on reads it
//! resolves index listings back through the store. It owns no state of its
//! own and takes no locks — every sub-operation is an idempotent call
//! against the store or an index, so retry (not mutual exclusion) is the
//! resilience mechanism.
//!
//! # Key Types
//!
//! - [`IndexManager`] — the orchestrator
//! - [`ManagerConfig`] — per-operation timeout budget
//! - [`ManagerError`] — the full failure taxonomy, naming the sub-step
//!   that failed

pub mod config;
pub mod error;
pub mod manager;

pub use config::ManagerConfig;
pub use error::{IndexStage, ManagerError, ManagerResult};
pub use manager::IndexManager;
