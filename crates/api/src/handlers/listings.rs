//! Handlers for published listings.
//!
//! Reads go straight to the repository. Deletes go through the
//! [`ListingFlow`](tradepost_db::flow::ListingFlow) so they share its write
//! guard with submits.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use tradepost_core::error::CoreError;
use tradepost_core::types::ListingId;
use tradepost_db::repositories::listing_repo::DEFAULT_RECENT_LIMIT;
use tradepost_db::repositories::ListingRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// GET /listings
// ---------------------------------------------------------------------------

/// All listings, most recent first.
pub async fn list_listings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let listings = ListingRepo::newest_first(&*state.store).await;
    Ok(Json(DataResponse { data: listings }))
}

// ---------------------------------------------------------------------------
// GET /listings/recent
// ---------------------------------------------------------------------------

pub async fn recent_listings(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let listings = ListingRepo::recent(&*state.store, limit).await;
    Ok(Json(DataResponse { data: listings }))
}

// ---------------------------------------------------------------------------
// GET /listings/{id}
// ---------------------------------------------------------------------------

pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<ListingId>,
) -> AppResult<impl IntoResponse> {
    let listing = ListingRepo::find_by_id(&*state.store, id)
        .await
        .ok_or_else(|| CoreError::NotFound {
            entity: "Listing",
            id: id.to_string(),
        })?;
    Ok(Json(DataResponse { data: listing }))
}

// ---------------------------------------------------------------------------
// DELETE /listings/{id}
// ---------------------------------------------------------------------------

/// Delete a listing. Deleting an unknown id is a no-op.
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(id): Path<ListingId>,
) -> AppResult<impl IntoResponse> {
    state.flow.remove_listing(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// DELETE /listings
// ---------------------------------------------------------------------------

pub async fn clear_listings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.flow.clear_listings().await?;
    Ok(StatusCode::NO_CONTENT)
}
