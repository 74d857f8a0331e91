//! Repository for the `progress_items` table.
//!
//! Every query is scoped by `user_id`; an item owned by someone else is
//! indistinguishable from a missing one.

use relocate_core::progress_items::toggle_subtask;
use relocate_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::PgPool;

use super::PgTx;
use crate::models::progress_item::{CreateProgressItem, ProgressItem, UpdateProgressItem};
use crate::store::StoreError;

const COLUMNS: &str = "id, user_id, category, title, description, status, priority, \
                       due_date, completed_date, notes, subtasks, created_at, updated_at";

pub struct ProgressItemRepo;

impl ProgressItemRepo {
    /// All items for a user, oldest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProgressItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM progress_items WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, ProgressItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProgressItem,
    ) -> Result<ProgressItem, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let item = Self::insert(&mut tx, user_id, input).await?;
        tx.commit().await?;
        Ok(item)
    }

    /// Insert one item inside an open transaction.
    pub async fn insert(
        tx: &mut PgTx<'_>,
        user_id: DbId,
        input: &CreateProgressItem,
    ) -> Result<ProgressItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO progress_items
                (user_id, category, title, description, status, priority,
                 due_date, completed_date, notes, subtasks)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProgressItem>(&query)
            .bind(user_id)
            .bind(&input.category)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status.as_str())
            .bind(input.priority.as_str())
            .bind(input.due_date)
            .bind(input.completed_date)
            .bind(&input.notes)
            .bind(Json(&input.subtasks))
            .fetch_one(&mut **tx)
            .await
    }

    /// Apply a partial update.
    ///
    /// The row is locked while the `completed_date` rule is evaluated, so
    /// the stored date always matches the stored status. Returns `None` if
    /// the item does not exist for this user.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateProgressItem,
        now: Timestamp,
    ) -> Result<Option<ProgressItem>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(mut item) = Self::lock(&mut tx, user_id, id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };

        item.apply_update(input, now);
        let item = Self::write_back(&mut tx, &item).await?;
        tx.commit().await?;
        Ok(Some(item))
    }

    /// Flip one subtask's completion flag.
    ///
    /// Returns `Ok(None)` for a missing item and a validation error for an
    /// out-of-range index.
    pub async fn toggle_subtask(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        index: usize,
        now: Timestamp,
    ) -> Result<Option<ProgressItem>, StoreError> {
        let mut tx = pool.begin().await?;
        let Some(mut item) = Self::lock(&mut tx, user_id, id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };

        if let Err(e) = toggle_subtask(&mut item.subtasks, index) {
            tx.rollback().await?;
            return Err(e.into());
        }
        item.updated_at = now;
        let item = Self::write_back(&mut tx, &item).await?;
        tx.commit().await?;
        Ok(Some(item))
    }

    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM progress_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn lock(
        tx: &mut PgTx<'_>,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<ProgressItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM progress_items WHERE id = $1 AND user_id = $2 FOR UPDATE"
        );
        sqlx::query_as::<_, ProgressItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await
    }

    async fn write_back(tx: &mut PgTx<'_>, item: &ProgressItem) -> Result<ProgressItem, sqlx::Error> {
        let query = format!(
            "UPDATE progress_items SET
                category = $3, title = $4, description = $5, status = $6, priority = $7,
                due_date = $8, completed_date = $9, notes = $10, subtasks = $11
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProgressItem>(&query)
            .bind(item.id)
            .bind(item.user_id)
            .bind(&item.category)
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.status.as_str())
            .bind(item.priority.as_str())
            .bind(item.due_date)
            .bind(item.completed_date)
            .bind(&item.notes)
            .bind(Json(&item.subtasks))
            .fetch_one(&mut **tx)
            .await
    }
}
