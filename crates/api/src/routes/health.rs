//! Root-level liveness and store check.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use tradepost_db::repositories::ListingRepo;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the store does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub store_healthy: bool,
    /// Listings currently published; `0` if the collection is unreadable.
    pub listing_count: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.store.health_check().await.is_ok();
    let listing_count = if store_healthy {
        ListingRepo::load_all(&*state.store).await.len()
    } else {
        0
    };

    Json(HealthResponse {
        status: if store_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
        listing_count,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
