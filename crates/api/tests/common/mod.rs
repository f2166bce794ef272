#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tradepost_api::config::ServerConfig;
use tradepost_api::router::build_app_router;
use tradepost_api::state::AppState;
use tradepost_db::{KeyValueStore, MemoryStore};

/// Build a test `ServerConfig` with no simulated latency.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        upload_delay_ms: 0,
        details_delay_ms: 0,
        submit_delay_ms: 0,
        revalidate_on_finalize: false,
    }
}

/// Build the full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryStore::new()))
}

/// Build the full application router over `store`. Routers built over the
/// same store share its state, so a test can issue several requests.
pub fn build_test_app_with(store: Arc<dyn KeyValueStore>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
