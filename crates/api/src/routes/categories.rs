//! Route definitions for category browsing.
//!
//! Mounted at `/categories` by `api_routes()`.
//!
//! ```text
//! GET    /                              list_categories
//! GET    /flat                          flat_categories
//! GET    /search                        search_categories (?q)
//! GET    /children                      category_children (?path)
//! GET    /{id}/path                     category_path
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Category routes -- mounted at `/categories`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_categories))
        .route("/flat", get(categories::flat_categories))
        .route("/search", get(categories::search_categories))
        .route("/children", get(categories::category_children))
        .route("/{id}/path", get(categories::category_path))
}
