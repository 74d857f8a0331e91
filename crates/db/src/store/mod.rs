//! Storage seam used by the HTTP layer.
//!
//! [`Store`] is implemented by [`PgStore`] (Postgres, the production
//! backend) and [`MemoryStore`] (in-process, for development and tests).
//! Handlers only ever see `Arc<dyn Store>`.

mod memory;
mod pg;

use async_trait::async_trait;
use relocate_core::error::CoreError;
use relocate_core::types::{DbId, StepId, Timestamp};

use crate::models::password_reset::{CreatePasswordReset, PasswordReset};
use crate::models::progress::{ProgressChange, ProgressLog};
use crate::models::progress_item::{CreateProgressItem, ProgressItem, UpdateProgressItem};
use crate::models::user::{CreateUser, User};

pub use memory::MemoryStore;
pub use pg::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Whether the error means the backend could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            )
        )
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    /// Short backend label for health output and logs.
    fn backend_name(&self) -> &'static str;

    async fn health_check(&self) -> StoreResult<()>;

    // -- users --------------------------------------------------------------

    /// Create a user with its progress row and starter items, atomically.
    ///
    /// A taken username is a `Conflict`.
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User>;

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>>;

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    async fn update_password(&self, user_id: DbId, password_hash: &str) -> StoreResult<bool>;

    /// Inactive accounts cannot log in and their tokens are refused.
    async fn set_user_active(&self, user_id: DbId, is_active: bool) -> StoreResult<bool>;

    // -- timeline progress ---------------------------------------------------

    /// Completed step ids; `None` for an unknown user.
    async fn get_completed(&self, user_id: DbId) -> StoreResult<Option<Vec<StepId>>>;

    /// Apply a completion toggle and append its audit record atomically.
    ///
    /// Idempotent on the completed set. Returns the new set, or `None` for
    /// an unknown user.
    async fn set_completed(&self, change: &ProgressChange) -> StoreResult<Option<Vec<StepId>>>;

    /// Clear the completed set and purge the audit log. `false` for an
    /// unknown user.
    async fn reset_progress(&self, user_id: DbId) -> StoreResult<bool>;

    /// Audit records for a user, oldest first. Audit only; no handler reads them.
    async fn progress_logs(&self, user_id: DbId) -> StoreResult<Vec<ProgressLog>>;

    // -- password resets -----------------------------------------------------

    async fn create_password_reset(&self, input: &CreatePasswordReset)
        -> StoreResult<PasswordReset>;

    async fn find_password_reset(
        &self,
        user_id: DbId,
        code_hash: &str,
    ) -> StoreResult<Option<PasswordReset>>;

    async fn delete_password_reset(&self, id: DbId) -> StoreResult<bool>;

    async fn delete_password_resets_for_user(&self, user_id: DbId) -> StoreResult<u64>;

    // -- progress items ------------------------------------------------------

    async fn list_items(&self, user_id: DbId) -> StoreResult<Vec<ProgressItem>>;

    async fn create_item(&self, user_id: DbId, input: &CreateProgressItem)
        -> StoreResult<ProgressItem>;

    async fn update_item(
        &self,
        user_id: DbId,
        id: DbId,
        input: &UpdateProgressItem,
        now: Timestamp,
    ) -> StoreResult<Option<ProgressItem>>;

    /// Out-of-range `index` is a `Validation` error.
    async fn toggle_subtask(
        &self,
        user_id: DbId,
        id: DbId,
        index: usize,
        now: Timestamp,
    ) -> StoreResult<Option<ProgressItem>>;

    async fn delete_item(&self, user_id: DbId, id: DbId) -> StoreResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_are_unavailable() {
        assert!(StoreError::Database(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(StoreError::Database(sqlx::Error::PoolClosed).is_unavailable());
        assert!(!StoreError::Database(sqlx::Error::RowNotFound).is_unavailable());
        assert!(!StoreError::Core(CoreError::Validation("x".into())).is_unavailable());
    }
}
