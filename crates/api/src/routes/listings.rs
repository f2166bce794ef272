//! Route definitions for published listings.
//!
//! Mounted at `/listings` by `api_routes()`.
//!
//! ```text
//! GET    /                              list_listings
//! DELETE /                              clear_listings
//! GET    /recent                        recent_listings (?limit)
//! GET    /{id}                          get_listing
//! DELETE /{id}                          delete_listing
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::listings;
use crate::state::AppState;

/// Listing routes -- mounted at `/listings`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(listings::list_listings).delete(listings::clear_listings),
        )
        .route("/recent", get(listings::recent_listings))
        .route(
            "/{id}",
            get(listings::get_listing).delete(listings::delete_listing),
        )
}
