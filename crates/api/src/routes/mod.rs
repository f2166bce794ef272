pub mod categories;
pub mod draft;
pub mod health;
pub mod listings;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                  full tree (GET)
/// /categories/flat                             pre-order flattening (GET)
/// /categories/search                           name search (?q)
/// /categories/children                         options below a path (?path=a,b)
/// /categories/{id}/path                        root-to-node crumbs
///
/// /catalog                                     conditions, shipping, formats
///
/// /draft                                       current draft (GET), abandon (DELETE)
/// /draft/category                              choose category (PUT)
/// /draft/images                                check an upload batch (POST)
/// /draft/details                               submit item details (PUT)
/// /draft/submit                                finalize into a listing (POST)
///
/// /listings                                    newest first (GET), clear (DELETE)
/// /listings/recent                             home page recents (?limit)
/// /listings/{id}                               get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .route("/catalog", get(handlers::catalog::get_catalog))
        .nest("/draft", draft::router())
        .nest("/listings", listings::router())
}
