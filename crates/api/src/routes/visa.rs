//! Route definitions for the `/visa` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::visa;
use crate::state::AppState;

/// Routes mounted at `/visa`.
///
/// ```text
/// GET /requirements         -> list_requirements
/// GET /requirements/{slug}  -> get_requirement
/// GET /checklist            -> checklist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/requirements", get(visa::list_requirements))
        .route("/requirements/{slug}", get(visa::get_requirement))
        .route("/checklist", get(visa::checklist))
}
