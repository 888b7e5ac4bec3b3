use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use bucketset_manager::IndexManager;

use crate::handler;

/// Shared handler state: the index manager over the configured backends.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<IndexManager>,
}

/// Build the axum router with all bucketset endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route(
            "/v1/entries",
            get(handler::get_all_entries_handler).post(handler::create_entry_handler),
        )
        .route("/v1/entries/:address", get(handler::get_entry_handler))
        .route(
            "/v1/buckets/:bucket_id/entries",
            get(handler::get_entries_by_bucket_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
