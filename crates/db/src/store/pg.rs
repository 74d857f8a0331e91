use async_trait::async_trait;
use relocate_core::types::{DbId, StepId, Timestamp};

use super::{Store, StoreResult};
use crate::models::password_reset::{CreatePasswordReset, PasswordReset};
use crate::models::progress::{ProgressChange, ProgressLog};
use crate::models::progress_item::{CreateProgressItem, ProgressItem, UpdateProgressItem};
use crate::models::user::{CreateUser, User};
use crate::repositories::{PasswordResetRepo, ProgressItemRepo, ProgressRepo, UserRepo};
use crate::DbPool;

/// Postgres-backed [`Store`], delegating to the repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        let mut tx = self.pool.begin().await?;
        let user = UserRepo::insert(&mut tx, input).await?;
        ProgressRepo::insert(&mut tx, user.id, &input.initial_completed_steps).await?;
        for item in &input.initial_items {
            ProgressItemRepo::insert(&mut tx, user.id, item).await?;
        }
        tx.commit().await?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_username(&self.pool, username).await?)
    }

    async fn update_password(&self, user_id: DbId, password_hash: &str) -> StoreResult<bool> {
        Ok(UserRepo::update_password(&self.pool, user_id, password_hash).await?)
    }

    async fn set_user_active(&self, user_id: DbId, is_active: bool) -> StoreResult<bool> {
        Ok(UserRepo::set_active(&self.pool, user_id, is_active).await?)
    }

    async fn get_completed(&self, user_id: DbId) -> StoreResult<Option<Vec<StepId>>> {
        Ok(ProgressRepo::get_completed(&self.pool, user_id).await?)
    }

    async fn set_completed(&self, change: &ProgressChange) -> StoreResult<Option<Vec<StepId>>> {
        Ok(ProgressRepo::set_completed(&self.pool, change).await?)
    }

    async fn reset_progress(&self, user_id: DbId) -> StoreResult<bool> {
        Ok(ProgressRepo::reset(&self.pool, user_id).await?)
    }

    async fn progress_logs(&self, user_id: DbId) -> StoreResult<Vec<ProgressLog>> {
        Ok(ProgressRepo::list_logs(&self.pool, user_id).await?)
    }

    async fn create_password_reset(
        &self,
        input: &CreatePasswordReset,
    ) -> StoreResult<PasswordReset> {
        Ok(PasswordResetRepo::create(&self.pool, input).await?)
    }

    async fn find_password_reset(
        &self,
        user_id: DbId,
        code_hash: &str,
    ) -> StoreResult<Option<PasswordReset>> {
        Ok(PasswordResetRepo::find_by_code(&self.pool, user_id, code_hash).await?)
    }

    async fn delete_password_reset(&self, id: DbId) -> StoreResult<bool> {
        Ok(PasswordResetRepo::delete(&self.pool, id).await?)
    }

    async fn delete_password_resets_for_user(&self, user_id: DbId) -> StoreResult<u64> {
        Ok(PasswordResetRepo::delete_for_user(&self.pool, user_id).await?)
    }

    async fn list_items(&self, user_id: DbId) -> StoreResult<Vec<ProgressItem>> {
        Ok(ProgressItemRepo::list_for_user(&self.pool, user_id).await?)
    }

    async fn create_item(
        &self,
        user_id: DbId,
        input: &CreateProgressItem,
    ) -> StoreResult<ProgressItem> {
        Ok(ProgressItemRepo::create(&self.pool, user_id, input).await?)
    }

    async fn update_item(
        &self,
        user_id: DbId,
        id: DbId,
        input: &UpdateProgressItem,
        now: Timestamp,
    ) -> StoreResult<Option<ProgressItem>> {
        Ok(ProgressItemRepo::update(&self.pool, user_id, id, input, now).await?)
    }

    async fn toggle_subtask(
        &self,
        user_id: DbId,
        id: DbId,
        index: usize,
        now: Timestamp,
    ) -> StoreResult<Option<ProgressItem>> {
        ProgressItemRepo::toggle_subtask(&self.pool, user_id, id, index, now).await
    }

    async fn delete_item(&self, user_id: DbId, id: DbId) -> StoreResult<bool> {
        Ok(ProgressItemRepo::delete(&self.pool, user_id, id).await?)
    }
}
