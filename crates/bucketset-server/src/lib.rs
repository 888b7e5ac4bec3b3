//! HTTP server for bucketset.
//!
//! Carries the logical external interface over HTTP:
//!
//! - `POST /v1/entries` — create an entry and index its address
//! - `GET /v1/entries/{address}` — point lookup by content address
//! - `GET /v1/buckets/{bucket_id}/entries` — bucket listing
//! - `GET /v1/entries` — global listing
//!
//! Every response body is the externally-tagged
//! [`ApiResponse`](bucketset_protocol::ApiResponse); the HTTP status is 200
//! for both arms so the tag, not the transport, is the error channel.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{PolicyConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::BucketSetServer;

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn test_server() -> BucketSetServer {
        BucketSetServer::new(ServerConfig::default())
    }

    async fn get(server: &BucketSetServer, uri: &str) -> Value {
        let response = server
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post(server: &BucketSetServer, uri: &str, body: Value) -> Value {
        let response = server
            .router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // -----------------------------------------------------------------------
    // Health / info
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn health_endpoint() {
        let server = test_server();
        let body = get(&server, "/v1/health").await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint() {
        let server = test_server();
        let body = get(&server, "/v1/info").await;
        assert_eq!(body["name"], "bucketset-server");
    }

    // -----------------------------------------------------------------------
    // The end-to-end scenario
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn create_retrieve_bucket_and_all() {
        let server = test_server();

        let created = post(
            &server,
            "/v1/entries",
            json!({ "entry": { "content": "sample content" } }),
        )
        .await;
        let address = created["Ok"].as_str().expect("Ok arm with address").to_string();

        let fetched = get(&server, &format!("/v1/entries/{address}")).await;
        assert_eq!(fetched, json!({ "Ok": { "content": "sample content" } }));

        let bucket_s = get(&server, "/v1/buckets/s/entries").await;
        assert_eq!(bucket_s["Ok"].as_array().unwrap().len(), 1);

        let all = get(&server, "/v1/entries").await;
        assert_eq!(all["Ok"].as_array().unwrap().len(), 1);

        post(
            &server,
            "/v1/entries",
            json!({ "entry": { "content": "more sample content" } }),
        )
        .await;

        let bucket_m = get(&server, "/v1/buckets/m/entries").await;
        assert_eq!(bucket_m["Ok"].as_array().unwrap().len(), 1);

        let all = get(&server, "/v1/entries").await;
        assert_eq!(all["Ok"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_is_idempotent_over_http() {
        let server = test_server();
        let body = json!({ "entry": { "content": "repeat after me" } });

        let first = post(&server, "/v1/entries", body.clone()).await;
        let second = post(&server, "/v1/entries", body).await;
        assert_eq!(first["Ok"], second["Ok"]);

        let all = get(&server, "/v1/entries").await;
        assert_eq!(all["Ok"].as_array().unwrap().len(), 1);
    }

    // -----------------------------------------------------------------------
    // Error arms
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn unknown_bucket_is_ok_and_empty() {
        let server = test_server();
        let body = get(&server, "/v1/buckets/z/entries").await;
        assert_eq!(body, json!({ "Ok": [] }));
    }

    #[tokio::test]
    async fn missing_address_is_not_found() {
        let server = test_server();
        let absent = "00".repeat(32);
        let body = get(&server, &format!("/v1/entries/{absent}")).await;
        assert_eq!(body["Err"]["kind"], "NotFound");
    }

    #[tokio::test]
    async fn malformed_address_is_bad_request() {
        let server = test_server();
        let body = get(&server, "/v1/entries/not-a-hash").await;
        assert_eq!(body["Err"]["kind"], "BadRequest");
    }

    // -----------------------------------------------------------------------
    // Policy selection through configuration
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn hash_prefix_policy_buckets_by_numeric_id() {
        let server = BucketSetServer::new(ServerConfig {
            policy: PolicyConfig::HashPrefix { prefix_bits: 4 },
            ..ServerConfig::default()
        });

        post(
            &server,
            "/v1/entries",
            json!({ "entry": { "content": "sample content" } }),
        )
        .await;

        // The entry is in exactly one of the 16 numeric buckets.
        let mut hits = 0;
        for id in 0..16 {
            let body = get(&server, &format!("/v1/buckets/{id}/entries")).await;
            hits += body["Ok"].as_array().unwrap().len();
        }
        assert_eq!(hits, 1);

        // And not under the first-char key.
        let body = get(&server, "/v1/buckets/s/entries").await;
        assert!(body["Ok"].as_array().unwrap().is_empty());
    }
}
