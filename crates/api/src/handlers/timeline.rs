//! Handlers for the relocation timeline and per-user completion.
//!
//! Views borrow from the shared catalog, so these handlers serialize with
//! `into_response()` while the state is still in scope.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use relocate_core::error::CoreError;
use relocate_core::progress::{
    annotate, group_by_category, summarize, AnnotatedStep, CompletedSteps, ProgressSummary,
};
use relocate_core::timeline::TimelineStep;
use relocate_core::types::StepId;
use relocate_db::models::progress::ProgressChange;
use serde::{Deserialize, Serialize};

use super::load_completed;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CatalogResponse<'a> {
    pub version: &'a str,
    pub total_steps: usize,
    pub steps: &'a [TimelineStep],
}

#[derive(Debug, Serialize)]
pub struct FullTimelineResponse<'a> {
    pub timeline: Vec<AnnotatedStep<'a>>,
    #[serde(flatten)]
    pub summary: ProgressSummary,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProgressRequest {
    pub step_id: StepId,
    pub completed: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProgressResponse {
    pub step_id: StepId,
    pub completed: bool,
    pub total_completed: usize,
    pub completion_percentage: f64,
    pub current_phase: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/timeline/steps
///
/// The catalog as configured, without any user annotation.
pub async fn list_steps(State(state): State<AppState>) -> Response {
    let catalog = &state.catalog;
    Json(DataResponse {
        data: CatalogResponse {
            version: catalog.version(),
            total_steps: catalog.len(),
            steps: catalog.list_steps(),
        },
    })
    .into_response()
}

/// GET /api/v1/timeline/full
pub async fn full_timeline(State(state): State<AppState>, auth: AuthUser) -> AppResult<Response> {
    let user = auth.load(&state).await?;
    let completed = load_completed(&state, user.id).await?;
    let catalog = &state.catalog;

    Ok(Json(DataResponse {
        data: FullTimelineResponse {
            timeline: annotate(catalog, &completed),
            summary: summarize(&completed, catalog),
        },
    })
    .into_response())
}

/// GET /api/v1/timeline/by-category
///
/// Category name -> annotated steps and stats, in catalog order.
pub async fn by_category(State(state): State<AppState>, auth: AuthUser) -> AppResult<Response> {
    let user = auth.load(&state).await?;
    let completed = load_completed(&state, user.id).await?;
    let groups = group_by_category(&state.catalog, &completed);
    Ok(Json(DataResponse { data: groups }).into_response())
}

/// POST /api/v1/timeline/update-progress
///
/// Mark one step completed or pending. Repeating a request changes nothing
/// but is still logged. Ids outside the catalog are rejected.
pub async fn update_progress(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<UpdateProgressRequest>,
) -> AppResult<Json<DataResponse<UpdateProgressResponse>>> {
    let user = auth.load(&state).await?;
    if !state.catalog.contains(input.step_id) {
        return Err(CoreError::Validation(format!(
            "Unknown step_id {} for timeline {}",
            input.step_id,
            state.catalog.version()
        ))
        .into());
    }

    let change = ProgressChange {
        user_id: user.id,
        step_id: input.step_id,
        completed: input.completed,
        notes: input.notes.filter(|n| !n.trim().is_empty()),
    };
    let steps = state
        .store
        .set_completed(&change)
        .await?
        .ok_or_else(|| CoreError::not_found("User", user.id))?;

    tracing::info!(
        user_id = user.id,
        step_id = input.step_id,
        completed = input.completed,
        "Timeline progress updated"
    );

    let completed: CompletedSteps = steps.into_iter().collect();
    let summary = summarize(&completed, &state.catalog);
    Ok(Json(DataResponse {
        data: UpdateProgressResponse {
            step_id: input.step_id,
            completed: input.completed,
            total_completed: summary.completed_steps,
            completion_percentage: summary.completion_percentage,
            current_phase: summary.current_phase,
        },
    }))
}
