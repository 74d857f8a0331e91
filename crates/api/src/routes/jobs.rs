//! Route definitions for the `/jobs` board.

use axum::routing::get;
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// GET /listings    -> list_listings
/// GET /featured    -> featured
/// GET /categories  -> by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/listings", get(jobs::list_listings))
        .route("/featured", get(jobs::featured))
        .route("/categories", get(jobs::by_category))
}
