//! User entity model and DTOs.

use relocate_core::progress_items::NewProgressItem;
use relocate_core::types::{DbId, StepId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `users` table.
///
/// Holds the password hash, so it is never serialized. Use [`UserResponse`]
/// for API output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Everything written when an account is created.
///
/// The user row, its progress row and the starter items are inserted
/// together or not at all.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub initial_completed_steps: Vec<StepId>,
    pub initial_items: Vec<NewProgressItem>,
}
