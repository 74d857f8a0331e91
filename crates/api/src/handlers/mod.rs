pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod jobs;
pub mod locations;
pub mod logistics;
pub mod progress_items;
pub mod resources;
pub mod timeline;
pub mod visa;

use relocate_core::error::CoreError;
use relocate_core::progress::CompletedSteps;
use relocate_core::types::DbId;

use crate::error::AppResult;
use crate::state::AppState;

/// The user's completed step set. Unknown users are `NotFound`.
pub(crate) async fn load_completed(state: &AppState, user_id: DbId) -> AppResult<CompletedSteps> {
    let steps = state
        .store
        .get_completed(user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", user_id))?;
    Ok(steps.into_iter().collect())
}
