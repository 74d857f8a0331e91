//! Route definitions for the `/analytics` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`. All require auth.
///
/// ```text
/// GET  /overview       -> overview
/// GET  /cost-tracking  -> cost_tracking
/// POST /reset          -> reset_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(analytics::overview))
        .route("/cost-tracking", get(analytics::cost_tracking))
        .route("/reset", post(analytics::reset_progress))
}
