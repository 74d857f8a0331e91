use axum::routing::get;
use axum::Router;

use crate::handlers::resources;
use crate::state::AppState;

/// Routes mounted at `/resources`.
///
/// ```text
/// GET /all     -> list_all
/// GET /search  -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(resources::list_all))
        .route("/search", get(resources::search))
}
