use axum::response::IntoResponse;
use axum::Json;

use tradepost_core::catalog::Catalogs;

use crate::error::AppResult;
use crate::response::DataResponse;

/// GET /catalog -- conditions, shipping options and listing formats.
pub async fn get_catalog() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: Catalogs::build(),
    }))
}
