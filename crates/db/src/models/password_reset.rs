//! One-time password reset codes.

use relocate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Row from `password_resets`. Only the SHA-256 of the code is stored.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordReset {
    pub id: DbId,
    pub user_id: DbId,
    pub code_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

impl PasswordReset {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct CreatePasswordReset {
    pub user_id: DbId,
    pub code_hash: String,
    pub expires_at: Timestamp,
}
