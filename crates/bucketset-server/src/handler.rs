use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::json;

use bucketset_protocol::{ApiError, ApiResponse, CreateEntryRequest, ErrorKind, HealthResponse};
use bucketset_types::{Address, BucketKey, Entry};

use crate::error::api_error;
use crate::router::AppState;

/// `create_my_entry`: store the entry and index its address.
pub async fn create_entry_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateEntryRequest>,
) -> Json<ApiResponse<String>> {
    match state.manager.create_entry(request.entry).await {
        Ok(address) => Json(ApiResponse::Ok(address.to_hex())),
        Err(e) => Json(ApiResponse::Err(api_error(&e))),
    }
}

/// `get_my_entry`: resolve a single entry by hex address.
pub async fn get_entry_handler(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Json<ApiResponse<Entry>> {
    let address = match Address::from_hex(&address) {
        Ok(address) => address,
        Err(e) => {
            return Json(ApiResponse::Err(ApiError::new(
                ErrorKind::BadRequest,
                e.to_string(),
            )))
        }
    };
    match state.manager.get_entry(&address).await {
        Ok(entry) => Json(ApiResponse::Ok(entry)),
        Err(e) => Json(ApiResponse::Err(api_error(&e))),
    }
}

/// `get_entries_by_bucket`: all entries under one bucket key.
pub async fn get_entries_by_bucket_handler(
    State(state): State<AppState>,
    Path(bucket_id): Path<String>,
) -> Json<ApiResponse<Vec<Entry>>> {
    let key = BucketKey::new(bucket_id);
    match state.manager.get_entries_by_bucket(&key).await {
        Ok(entries) => Json(ApiResponse::Ok(entries)),
        Err(e) => Json(ApiResponse::Err(api_error(&e))),
    }
}

/// `get_all_entries`: every committed entry.
pub async fn get_all_entries_handler(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Entry>>> {
    match state.manager.get_all_entries().await {
        Ok(entries) => Json(ApiResponse::Ok(entries)),
        Err(e) => Json(ApiResponse::Err(api_error(&e))),
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "bucketset-server",
        "version": env!("CARGO_PKG_VERSION"),
        "protocol_version": bucketset_protocol::PROTOCOL_VERSION,
    }))
}
