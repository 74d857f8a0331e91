//! Route definitions for the `/progress` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::progress_items;
use crate::state::AppState;

/// Routes mounted at `/progress`. All require auth.
///
/// ```text
/// GET    /items                                -> list_items
/// POST   /items                                -> create_item
/// PUT    /items/{id}                           -> update_item
/// DELETE /items/{id}                           -> delete_item
/// POST   /items/{id}/subtasks/{index}/toggle   -> toggle_subtask
/// GET    /dashboard                            -> item_dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(progress_items::list_items).post(progress_items::create_item),
        )
        .route(
            "/items/{id}",
            put(progress_items::update_item).delete(progress_items::delete_item),
        )
        .route(
            "/items/{id}/subtasks/{index}/toggle",
            post(progress_items::toggle_subtask),
        )
        .route("/dashboard", get(progress_items::item_dashboard))
}
