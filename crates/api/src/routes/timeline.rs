//! Route definitions for the `/timeline` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::timeline;
use crate::state::AppState;

/// Routes mounted at `/timeline`.
///
/// ```text
/// GET  /steps            -> list_steps
/// GET  /full             -> full_timeline (requires auth)
/// GET  /by-category      -> by_category (requires auth)
/// POST /update-progress  -> update_progress (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/steps", get(timeline::list_steps))
        .route("/full", get(timeline::full_timeline))
        .route("/by-category", get(timeline::by_category))
        .route("/update-progress", post(timeline::update_progress))
}
