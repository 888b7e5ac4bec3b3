use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use bucketset_index::{BucketPolicy, FirstCharPolicy, HashPrefixPolicy};
use bucketset_manager::ManagerConfig;

use crate::error::{ServerError, ServerResult};

/// Bucket key derivation rule selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PolicyConfig {
    /// First character of the content, lower-cased (the default).
    FirstChar,
    /// Bit prefix of the content address.
    HashPrefix { prefix_bits: u32 },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Timeout budget per store/index sub-operation, in milliseconds.
    pub op_timeout_ms: u64,
    pub policy: PolicyConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9600".parse().expect("static addr"),
            op_timeout_ms: 5_000,
            policy: PolicyConfig::FirstChar,
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// The manager configuration implied by this server configuration.
    pub fn manager_config(&self) -> ManagerConfig {
        ManagerConfig {
            op_timeout: Duration::from_millis(self.op_timeout_ms),
        }
    }

    /// Instantiate the configured bucket policy.
    pub fn build_policy(&self) -> Arc<dyn BucketPolicy> {
        match self.policy {
            PolicyConfig::FirstChar => Arc::new(FirstCharPolicy),
            PolicyConfig::HashPrefix { prefix_bits } => {
                Arc::new(HashPrefixPolicy::new(prefix_bits))
            }
        }
    }
}
