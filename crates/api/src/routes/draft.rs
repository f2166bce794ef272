//! Route definitions for the listing wizard.
//!
//! Mounted at `/draft` by `api_routes()`.
//!
//! ```text
//! GET    /                              get_draft
//! DELETE /                              abandon_draft
//! PUT    /category                      choose_category
//! POST   /images                        check_images
//! PUT    /details                       submit_details
//! POST   /submit                        submit_listing
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::draft;
use crate::state::AppState;

/// Wizard routes -- mounted at `/draft`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(draft::get_draft).delete(draft::abandon_draft))
        .route("/category", put(draft::choose_category))
        .route("/images", post(draft::check_images))
        .route("/details", put(draft::submit_details))
        .route("/submit", post(draft::submit_listing))
}
