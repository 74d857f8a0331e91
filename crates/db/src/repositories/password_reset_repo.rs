//! Repository for the `password_resets` table.

use relocate_core::types::DbId;
use sqlx::PgPool;

use crate::models::password_reset::{CreatePasswordReset, PasswordReset};

const COLUMNS: &str = "id, user_id, code_hash, expires_at, created_at";

pub struct PasswordResetRepo;

impl PasswordResetRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePasswordReset,
    ) -> Result<PasswordReset, sqlx::Error> {
        let query = format!(
            "INSERT INTO password_resets (user_id, code_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PasswordReset>(&query)
            .bind(input.user_id)
            .bind(&input.code_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a reset by user and code hash, expired or not.
    pub async fn find_by_code(
        pool: &PgPool,
        user_id: DbId,
        code_hash: &str,
    ) -> Result<Option<PasswordReset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM password_resets
             WHERE user_id = $1 AND code_hash = $2
             ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, PasswordReset>(&query)
            .bind(user_id)
            .bind(code_hash)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM password_resets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every outstanding code for a user. Returns the number removed.
    pub async fn delete_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM password_resets WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
