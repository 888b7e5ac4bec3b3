use std::sync::Arc;

use tokio::net::TcpListener;

use bucketset_index::{InMemoryBucketIndex, InMemoryGlobalIndex};
use bucketset_manager::IndexManager;
use bucketset_store::InMemoryEntryStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::{build_router, AppState};

/// Bucketset entry server.
///
/// Wires the configured bucket policy and timeout budget into an
/// [`IndexManager`] over in-memory backends and exposes the external
/// interface over HTTP.
pub struct BucketSetServer {
    config: ServerConfig,
    state: AppState,
}

impl BucketSetServer {
    pub fn new(config: ServerConfig) -> Self {
        let manager = IndexManager::new(
            Arc::new(InMemoryEntryStore::new()),
            Arc::new(InMemoryBucketIndex::new()),
            Arc::new(InMemoryGlobalIndex::new()),
        )
        .with_policy(config.build_policy())
        .with_config(config.manager_config());

        let state = AppState {
            manager: Arc::new(manager),
        };
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(self.state);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("bucketset server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
