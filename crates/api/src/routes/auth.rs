//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register                  -> register
/// POST /login                     -> login
/// GET  /me                        -> me (requires auth)
/// POST /reset-password            -> request_password_reset
/// POST /complete-password-reset   -> complete_password_reset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
        .route("/reset-password", post(auth::request_password_reset))
        .route(
            "/complete-password-reset",
            post(auth::complete_password_reset),
        )
}
