//! Handlers for the `/auth` resource (register, login, me, password reset).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use relocate_core::error::CoreError;
use relocate_core::types::StepId;
use relocate_db::models::password_reset::CreatePasswordReset;
use relocate_db::models::user::{User, UserResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::reset::{generate_reset_code, hash_reset_code};
use crate::bootstrap::new_account;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, MessageBody};
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Incorrect username or password";
const INVALID_RESET_CODE: &str = "Invalid or expired reset code";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    pub password: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct CompleteResetRequest {
    pub username: String,
    pub reset_code: String,
    pub new_password: String,
}

/// Returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub completed_steps: Vec<StepId>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: &'static str,
    /// Present only when the account exists. There is no mail delivery, so
    /// the code is handed back directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_code: Option<String>,
    pub expires_in_minutes: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account with empty timeline progress and the sample progress
/// items, then log it in.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AuthResponse>>)> {
    input.validate()?;
    validate_password_strength(&input.password, state.config.password_min_length)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let account = new_account(
        input.username.trim().to_string(),
        input.email.filter(|e| !e.trim().is_empty()),
        password_hash,
        Vec::new(),
        Utc::now(),
    );
    let user = state.store.create_user(&account).await?;
    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let response = auth_response(&state, &user)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let user = state
        .store
        .find_user_by_username(input.username.trim())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let response = auth_response(&state, &user)?;
    Ok(Json(DataResponse { data: response }))
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<MeResponse>>> {
    let user = auth.load(&state).await?;
    let completed_steps = state
        .store
        .get_completed(user.id)
        .await?
        .unwrap_or_default();

    Ok(Json(DataResponse {
        data: MeResponse {
            user: UserResponse::from(&user),
            completed_steps,
        },
    }))
}

/// POST /api/v1/auth/reset-password
///
/// Always answers with the same message. When the account exists a fresh
/// one-time code is issued alongside it.
pub async fn request_password_reset(
    State(state): State<AppState>,
    AppJson(input): AppJson<ResetRequest>,
) -> AppResult<Json<DataResponse<ResetResponse>>> {
    let ttl = state.config.reset_code_ttl_mins;
    let mut response = ResetResponse {
        message: "If the account exists, a reset code has been generated",
        reset_code: None,
        expires_in_minutes: ttl,
    };

    if let Some(user) = state.store.find_user_by_username(input.username.trim()).await? {
        let (code, code_hash) = generate_reset_code();
        state
            .store
            .create_password_reset(&CreatePasswordReset {
                user_id: user.id,
                code_hash,
                expires_at: Utc::now() + Duration::minutes(ttl),
            })
            .await?;
        tracing::info!(user_id = user.id, "Password reset code issued");
        response.reset_code = Some(code);
    }

    Ok(Json(DataResponse { data: response }))
}

/// POST /api/v1/auth/complete-password-reset
///
/// Consumes the code. On success every outstanding code for the user is
/// discarded.
pub async fn complete_password_reset(
    State(state): State<AppState>,
    AppJson(input): AppJson<CompleteResetRequest>,
) -> AppResult<Json<DataResponse<MessageBody>>> {
    let invalid = || AppError::Core(CoreError::Validation(INVALID_RESET_CODE.into()));

    let user = state
        .store
        .find_user_by_username(input.username.trim())
        .await?
        .ok_or_else(invalid)?;

    let reset = state
        .store
        .find_password_reset(user.id, &hash_reset_code(&input.reset_code))
        .await?
        .ok_or_else(invalid)?;

    if reset.is_expired(Utc::now()) {
        state.store.delete_password_reset(reset.id).await?;
        return Err(invalid());
    }

    validate_password_strength(&input.new_password, state.config.password_min_length)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    if !state.store.update_password(user.id, &password_hash).await? {
        return Err(AppError::Core(CoreError::not_found("User", user.id)));
    }
    state.store.delete_password_resets_for_user(user.id).await?;
    tracing::info!(user_id = user.id, "Password reset completed");

    Ok(Json(DataResponse {
        data: MessageBody {
            message: "Password has been reset",
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        token_type: "bearer",
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserResponse::from(user),
    })
}
