//! Handlers for the listing wizard.
//!
//! Each step delegates to [`ListingFlow`](tradepost_db::flow::ListingFlow),
//! which owns the draft record and the simulated step latencies.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use tradepost_core::category::{CategoryPath, CategoryTree};
use tradepost_core::draft::{Draft, DraftStage, ImageRef};
use tradepost_core::validation::{ImageCandidate, ItemDetailsInput};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Category chosen in the category step, as ids from a root.
#[derive(Debug, Deserialize)]
pub struct ChooseCategoryRequest {
    pub path: Vec<String>,
}

/// An upload batch checked against the images already attached.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBatchRequest {
    #[serde(default)]
    pub current: Vec<ImageRef>,
    pub candidates: Vec<ImageCandidate>,
}

/// The stored draft together with the wizard stage it implies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    pub stage: DraftStage,
    pub draft: Option<Draft>,
    /// The stored category path re-resolved against the tree, so the
    /// category step can reopen where the seller left off.
    pub resume_path: CategoryPath,
}

impl DraftView {
    fn new(draft: Option<Draft>, tree: &CategoryTree) -> Self {
        let resume_path = draft
            .as_ref()
            .and_then(|d| CategoryPath::from_crumbs(tree, &d.category_path).ok())
            .unwrap_or_default();
        Self {
            stage: DraftStage::of(draft.as_ref()),
            draft,
            resume_path,
        }
    }
}

// ---------------------------------------------------------------------------
// GET /draft
// ---------------------------------------------------------------------------

pub async fn get_draft(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let draft = state.flow.draft().await;
    Ok(Json(DataResponse {
        data: DraftView::new(draft, &state.tree),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /draft
// ---------------------------------------------------------------------------

/// Abandon the wizard: cancel pending steps and discard the draft.
pub async fn abandon_draft(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.flow.abandon().await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// PUT /draft/category
// ---------------------------------------------------------------------------

pub async fn choose_category(
    State(state): State<AppState>,
    Json(body): Json<ChooseCategoryRequest>,
) -> AppResult<impl IntoResponse> {
    let path = CategoryPath::from_ids(&state.tree, &body.path)?;
    let draft = state.flow.choose_category(&path).await?;
    Ok(Json(DataResponse {
        data: DraftView::new(Some(draft), &state.tree),
    }))
}

// ---------------------------------------------------------------------------
// POST /draft/images
// ---------------------------------------------------------------------------

/// Filter an upload batch and return the resulting image list. The draft
/// is not touched; images are saved with the item details.
pub async fn check_images(
    State(state): State<AppState>,
    Json(body): Json<ImageBatchRequest>,
) -> AppResult<impl IntoResponse> {
    let images = state.flow.check_images(&body.current, body.candidates).await?;
    Ok(Json(DataResponse { data: images }))
}

// ---------------------------------------------------------------------------
// PUT /draft/details
// ---------------------------------------------------------------------------

pub async fn submit_details(
    State(state): State<AppState>,
    Json(input): Json<ItemDetailsInput>,
) -> AppResult<impl IntoResponse> {
    let draft = state.flow.submit_details(&input).await?;
    Ok(Json(DataResponse {
        data: DraftView::new(Some(draft), &state.tree),
    }))
}

// ---------------------------------------------------------------------------
// POST /draft/submit
// ---------------------------------------------------------------------------

/// Finalize the draft into an active listing.
pub async fn submit_listing(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let listing = state.flow.finalize().await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: listing })))
}
