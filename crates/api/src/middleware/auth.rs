//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use relocate_core::error::CoreError;
use relocate_core::types::DbId;
use relocate_db::models::user::User;

use crate::auth::jwt::validate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Authenticated caller, taken from the `Authorization: Bearer` header.
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub username: String,
}

impl AuthUser {
    /// Load the caller's user row.
    ///
    /// A token whose user has since disappeared or been deactivated is
    /// treated as invalid. Every handler that reads or writes the caller's
    /// own records goes through here, so deactivation takes effect on the
    /// next request rather than at token expiry.
    pub async fn load(&self, state: &AppState) -> AppResult<User> {
        match state.store.find_user_by_id(self.user_id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(AppError::Core(CoreError::Unauthorized(
                "Could not validate credentials".into(),
            ))),
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}
