//! Repository for `user_progress` and `progress_logs`.

use relocate_core::types::{DbId, StepId};
use sqlx::PgPool;

use super::PgTx;
use crate::models::progress::{ProgressChange, ProgressLog, UserProgress};

const COLUMNS: &str = "user_id, completed_steps, updated_at";

pub struct ProgressRepo;

impl ProgressRepo {
    /// Create the progress row for a new user.
    pub async fn insert(
        tx: &mut PgTx<'_>,
        user_id: DbId,
        completed_steps: &[StepId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO user_progress (user_id, completed_steps) VALUES ($1, $2)")
            .bind(user_id)
            .bind(completed_steps)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// The user's progress row, if any.
    pub async fn find(pool: &PgPool, user_id: DbId) -> Result<Option<UserProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_progress WHERE user_id = $1");
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Completed step ids, or `None` if the user has no progress row.
    pub async fn get_completed(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Vec<StepId>>, sqlx::Error> {
        Ok(Self::find(pool, user_id)
            .await?
            .map(|progress| progress.completed_steps))
    }

    /// Apply one toggle and append the audit record in a single transaction.
    ///
    /// The array update is one statement, so concurrent toggles for the same
    /// user serialize on the row lock and never lose a write. Returns `None`
    /// (and logs nothing) when the user has no progress row.
    pub async fn set_completed(
        pool: &PgPool,
        change: &ProgressChange,
    ) -> Result<Option<Vec<StepId>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let row: Option<(Vec<StepId>,)> = sqlx::query_as(
            "UPDATE user_progress SET completed_steps = CASE
                 WHEN $3 AND NOT ($2 = ANY(completed_steps)) THEN array_append(completed_steps, $2)
                 WHEN NOT $3 THEN array_remove(completed_steps, $2)
                 ELSE completed_steps
             END
             WHERE user_id = $1
             RETURNING completed_steps",
        )
        .bind(change.user_id)
        .bind(change.step_id)
        .bind(change.completed)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((steps,)) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            "INSERT INTO progress_logs (user_id, step_id, completed, notes)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(change.user_id)
        .bind(change.step_id)
        .bind(change.completed)
        .bind(&change.notes)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(steps))
    }

    /// Clear the completed set and purge the audit log.
    ///
    /// Returns `false` when the user has no progress row.
    pub async fn reset(pool: &PgPool, user_id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result =
            sqlx::query("UPDATE user_progress SET completed_steps = '{}' WHERE user_id = $1")
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM progress_logs WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Audit records for a user, oldest first.
    pub async fn list_logs(pool: &PgPool, user_id: DbId) -> Result<Vec<ProgressLog>, sqlx::Error> {
        sqlx::query_as::<_, ProgressLog>(
            "SELECT id, user_id, step_id, completed, notes, created_at
             FROM progress_logs WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
