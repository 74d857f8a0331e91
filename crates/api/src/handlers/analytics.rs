//! Handlers for progress analytics and the relocation budget.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use indexmap::IndexMap;
use relocate_core::budget::{CostEstimate, CostTracking};
use relocate_core::error::CoreError;
use relocate_core::progress::{
    category_breakdown, summarize, timeline_insights, CategoryStats, TimelineInsights,
};
use serde::Serialize;

use super::load_completed;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, MessageBody};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UserProgressStats {
    pub overall_completion: f64,
    pub completed_steps: usize,
    pub total_steps: usize,
    pub current_phase: String,
    pub category_breakdown: IndexMap<String, CategoryStats>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsOverview {
    pub user_progress: UserProgressStats,
    pub cost_breakdown: CostEstimate,
    pub timeline_insights: TimelineInsights,
}

/// GET /api/v1/analytics/overview
///
/// Pace is measured from account creation.
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<AnalyticsOverview>>> {
    let user = auth.load(&state).await?;
    let completed = load_completed(&state, user.id).await?;
    let summary = summarize(&completed, &state.catalog);
    let days_active = (Utc::now() - user.created_at).num_days();
    let insights = timeline_insights(&summary, days_active);

    Ok(Json(DataResponse {
        data: AnalyticsOverview {
            user_progress: UserProgressStats {
                overall_completion: summary.completion_percentage,
                completed_steps: summary.completed_steps,
                total_steps: summary.total_steps,
                current_phase: summary.current_phase,
                category_breakdown: category_breakdown(&completed, &state.catalog),
            },
            cost_breakdown: state.reference.budget.estimated_costs(),
            timeline_insights: insights,
        },
    }))
}

/// GET /api/v1/analytics/cost-tracking
pub async fn cost_tracking(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Json<DataResponse<CostTracking>> {
    Json(DataResponse {
        data: state.reference.budget.cost_tracking(),
    })
}

/// POST /api/v1/analytics/reset
///
/// Clear every completed step and the audit log. Cannot be undone.
pub async fn reset_progress(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<MessageBody>>> {
    let user = auth.load(&state).await?;
    if !state.store.reset_progress(user.id).await? {
        return Err(CoreError::not_found("User", user.id).into());
    }
    tracing::info!(user_id = user.id, "Timeline progress reset");

    Ok(Json(DataResponse {
        data: MessageBody {
            message: "Progress has been reset",
        },
    }))
}
