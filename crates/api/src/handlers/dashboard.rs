//! Handler for the landing dashboard.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use relocate_core::progress::{round1, summarize};
use relocate_core::progress_items::{dashboard, ItemStatus};
use relocate_core::types::{DbId, Timestamp};
use relocate_db::models::progress_item::ProgressItem;
use serde::Serialize;

use super::load_completed;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// How many items the activity feed shows.
const RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
pub struct RelocationProgress {
    pub completion_percentage: f64,
    pub completed_steps_count: usize,
    pub total_steps: usize,
    pub current_phase: String,
}

#[derive(Debug, Serialize)]
pub struct QuickStats {
    pub days_active: i64,
    pub budget_allocated: i64,
    pub budget_remaining: i64,
    pub open_items: usize,
    pub overdue_items: usize,
}

/// A recently touched progress item.
#[derive(Debug, Serialize)]
pub struct ActivityEntry {
    pub item_id: DbId,
    pub title: String,
    pub category: String,
    pub status: ItemStatus,
    pub at: Timestamp,
}

impl From<&ProgressItem> for ActivityEntry {
    fn from(item: &ProgressItem) -> Self {
        Self {
            item_id: item.id,
            title: item.title.clone(),
            category: item.category.clone(),
            status: item.status,
            at: item.updated_at,
        }
    }
}

/// The most recently updated items, newest first.
fn recent_activity(items: &[ProgressItem]) -> Vec<ActivityEntry> {
    let mut recent: Vec<&ProgressItem> = items.iter().collect();
    recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
    recent
        .into_iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(ActivityEntry::from)
        .collect()
}

#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub user: String,
    pub relocation_progress: RelocationProgress,
    pub quick_stats: QuickStats,
    /// Newest first.
    pub recent_activity: Vec<ActivityEntry>,
}

/// GET /api/v1/dashboard/overview
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<DashboardOverview>>> {
    let user = auth.load(&state).await?;
    let completed = load_completed(&state, user.id).await?;
    let summary = summarize(&completed, &state.catalog);

    let now = Utc::now();
    let items = state.store.list_items(user.id).await?;
    let item_dashboard = dashboard(&items, now);
    let open_items = items
        .iter()
        .filter(|i| i.status != ItemStatus::Completed)
        .count();

    let budget = state.reference.budget.overview();

    Ok(Json(DataResponse {
        data: DashboardOverview {
            user: user.username.clone(),
            relocation_progress: RelocationProgress {
                completion_percentage: round1(summary.completion_percentage),
                completed_steps_count: summary.completed_steps,
                total_steps: summary.total_steps,
                current_phase: summary.current_phase,
            },
            quick_stats: QuickStats {
                days_active: (now - user.created_at).num_days().max(0),
                budget_allocated: budget.total_budget,
                budget_remaining: budget.remaining,
                open_items,
                overdue_items: item_dashboard.overview.overdue_items,
            },
            recent_activity: recent_activity(&items),
        },
    }))
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use relocate_core::progress_items::Priority;

    use super::*;

    fn item(id: DbId, minutes_ago: i64) -> ProgressItem {
        let at = Utc::now() - Duration::minutes(minutes_ago);
        ProgressItem {
            id,
            user_id: 1,
            category: "Housing".into(),
            title: format!("Item {id}"),
            description: String::new(),
            status: ItemStatus::InProgress,
            priority: Priority::Medium,
            due_date: None,
            completed_date: None,
            notes: None,
            subtasks: Vec::new(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn recent_activity_is_newest_first_and_capped() {
        let items: Vec<ProgressItem> = (1..=8).map(|id| item(id, 100 - id * 10)).collect();
        let recent = recent_activity(&items);

        let ids: Vec<DbId> = recent.iter().map(|e| e.item_id).collect();
        assert_eq!(ids, vec![8, 7, 6, 5, 4]);
    }

    #[test]
    fn recent_activity_breaks_ties_by_id() {
        let mut items = vec![item(1, 5), item(2, 5)];
        items[1].updated_at = items[0].updated_at;
        let recent = recent_activity(&items);
        assert_eq!(recent[0].item_id, 2);
        assert_eq!(recent[0].title, "Item 2");
    }
}
