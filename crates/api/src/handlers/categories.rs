//! Handlers for browsing and searching the category hierarchy.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use tradepost_core::category::CategoryCrumb;
use tradepost_core::error::CoreError;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `path` is a comma-separated list of ids from a root.
#[derive(Debug, Deserialize)]
pub struct ChildrenParams {
    pub path: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

/// The full category tree.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.tree.roots(),
    }))
}

// ---------------------------------------------------------------------------
// GET /categories/flat
// ---------------------------------------------------------------------------

/// Every category in pre-order with its depth and joined label.
pub async fn flat_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.tree.flatten(),
    }))
}

// ---------------------------------------------------------------------------
// GET /categories/search
// ---------------------------------------------------------------------------

/// Search category names. `data` is `null` when the query is blank (no
/// search active) and an array, possibly empty, otherwise.
pub async fn search_categories(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.tree.search(params.q.as_deref().unwrap_or_default());
    Ok(Json(DataResponse {
        data: outcome.into_hits(),
    }))
}

// ---------------------------------------------------------------------------
// GET /categories/children
// ---------------------------------------------------------------------------

/// Options below a path; empty if the path does not follow the tree.
pub async fn category_children(
    State(state): State<AppState>,
    Query(params): Query<ChildrenParams>,
) -> AppResult<impl IntoResponse> {
    let ids: Vec<&str> = params
        .path
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    Ok(Json(DataResponse {
        data: state.tree.children_at(&ids),
    }))
}

// ---------------------------------------------------------------------------
// GET /categories/{id}/path
// ---------------------------------------------------------------------------

/// Root-to-node path of a category as crumbs.
pub async fn category_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let path = state.tree.path_to(&id);
    if path.is_empty() {
        return Err(CoreError::NotFound {
            entity: "Category",
            id,
        }
        .into());
    }

    let crumbs: Vec<CategoryCrumb> = path.iter().map(|node| node.crumb()).collect();
    Ok(Json(DataResponse { data: crumbs }))
}
