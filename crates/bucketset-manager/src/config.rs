use std::time::Duration;

/// Configuration for the [`IndexManager`](crate::IndexManager).
#[derive(Clone, Debug)]
pub struct ManagerConfig {
    /// Budget for each individual store or index operation. A composite
    /// operation (create, listing) applies this per sub-step, not in total.
    pub op_timeout: Duration,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            op_timeout: Duration::from_secs(5),
        }
    }
}
