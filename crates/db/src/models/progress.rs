//! Timeline progress rows.

use relocate_core::types::{DbId, StepId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Row from `user_progress`.
#[derive(Debug, Clone, FromRow)]
pub struct UserProgress {
    pub user_id: DbId,
    pub completed_steps: Vec<StepId>,
    pub updated_at: Timestamp,
}

/// Row from `progress_logs`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgressLog {
    pub id: DbId,
    pub user_id: DbId,
    pub step_id: StepId,
    pub completed: bool,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// A single completion toggle, applied and logged atomically.
#[derive(Debug, Clone)]
pub struct ProgressChange {
    pub user_id: DbId,
    pub step_id: StepId,
    pub completed: bool,
    pub notes: Option<String>,
}
