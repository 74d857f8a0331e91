//! Handlers for the `/progress` resource: a user's own task list.
//!
//! Every query is scoped to the caller; another user's item id behaves as
//! if it did not exist.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use relocate_core::error::CoreError;
use relocate_core::progress_items::{
    apply_status_change, dashboard, distinct_categories, filter_items, statistics, ItemStatistics,
    ItemStatus, Priority, Subtask, DEFAULT_CATEGORY,
};
use relocate_core::types::{DbId, Timestamp};
use relocate_db::models::progress_item::{CreateProgressItem, ProgressItem, UpdateProgressItem};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::query::non_empty;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Body for `POST /progress/items`. Status and priority are validated
/// against their allowed values rather than rejected as malformed JSON.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    pub category: Option<String>,
    #[serde(default)]
    pub description: String,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub notes: Option<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

/// Body for `PUT /progress/items/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemListResponse<'a> {
    pub items: Vec<&'a ProgressItem>,
    /// Computed over all of the user's items, ignoring the filters.
    pub statistics: ItemStatistics,
    pub categories: Vec<String>,
    pub statuses: Vec<&'static str>,
}

impl TryFrom<CreateItemRequest> for CreateProgressItem {
    type Error = CoreError;

    fn try_from(input: CreateItemRequest) -> Result<Self, Self::Error> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        let status = input
            .status
            .as_deref()
            .map(ItemStatus::from_str_value)
            .transpose()?
            .unwrap_or_default();
        let priority = input
            .priority
            .as_deref()
            .map(Priority::from_str_value)
            .transpose()?
            .unwrap_or_default();
        let category = non_empty(input.category.as_deref())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();

        Ok(CreateProgressItem {
            category,
            title: title.to_string(),
            description: input.description,
            status,
            priority,
            due_date: input.due_date,
            completed_date: apply_status_change(ItemStatus::NotStarted, status, None, Utc::now()),
            notes: input.notes,
            subtasks: input.subtasks,
        })
    }
}

impl TryFrom<UpdateItemRequest> for UpdateProgressItem {
    type Error = CoreError;

    fn try_from(input: UpdateItemRequest) -> Result<Self, Self::Error> {
        if input.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        Ok(UpdateProgressItem {
            category: input.category,
            title: input.title.map(|t| t.trim().to_string()),
            description: input.description,
            status: input
                .status
                .as_deref()
                .map(ItemStatus::from_str_value)
                .transpose()?,
            priority: input
                .priority
                .as_deref()
                .map(Priority::from_str_value)
                .transpose()?,
            due_date: input.due_date,
            notes: input.notes,
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/progress/items?category=&status=
pub async fn list_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<ItemFilter>,
) -> AppResult<Response> {
    let status = non_empty(filter.status.as_deref())
        .map(ItemStatus::from_str_value)
        .transpose()?;

    let user = auth.load(&state).await?;
    let items = state.store.list_items(user.id).await?;

    Ok(Json(DataResponse {
        data: ItemListResponse {
            items: filter_items(&items, non_empty(filter.category.as_deref()), status),
            statistics: statistics(&items),
            categories: distinct_categories(&items),
            statuses: ItemStatus::ALL.iter().map(ItemStatus::as_str).collect(),
        },
    })
    .into_response())
}

/// POST /api/v1/progress/items
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CreateItemRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ProgressItem>>)> {
    let user = auth.load(&state).await?;
    let new_item = CreateProgressItem::try_from(input)?;
    let item = state.store.create_item(user.id, &new_item).await?;

    tracing::info!(user_id = user.id, item_id = item.id, "Progress item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/progress/items/{id}
///
/// Moving into `completed` stamps `completed_date`; moving out clears it.
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(item_id): Path<DbId>,
    AppJson(input): AppJson<UpdateItemRequest>,
) -> AppResult<Json<DataResponse<ProgressItem>>> {
    let user = auth.load(&state).await?;
    let update = UpdateProgressItem::try_from(input)?;
    let item = state
        .store
        .update_item(user.id, item_id, &update, Utc::now())
        .await?
        .ok_or_else(|| CoreError::not_found("ProgressItem", item_id))?;

    tracing::info!(
        user_id = user.id,
        item_id,
        status = item.status.as_str(),
        "Progress item updated"
    );

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/progress/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(item_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let user = auth.load(&state).await?;
    if !state.store.delete_item(user.id, item_id).await? {
        return Err(AppError::Core(CoreError::not_found("ProgressItem", item_id)));
    }

    tracing::info!(user_id = user.id, item_id, "Progress item deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/progress/items/{id}/subtasks/{index}/toggle
pub async fn toggle_subtask(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((item_id, index)): Path<(DbId, usize)>,
) -> AppResult<Json<DataResponse<ProgressItem>>> {
    let user = auth.load(&state).await?;
    let item = state
        .store
        .toggle_subtask(user.id, item_id, index, Utc::now())
        .await?
        .ok_or_else(|| CoreError::not_found("ProgressItem", item_id))?;

    Ok(Json(DataResponse { data: item }))
}

/// GET /api/v1/progress/dashboard
pub async fn item_dashboard(State(state): State<AppState>, auth: AuthUser) -> AppResult<Response> {
    let user = auth.load(&state).await?;
    let items = state.store.list_items(user.id).await?;
    Ok(Json(DataResponse {
        data: dashboard(&items, Utc::now()),
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn create(title: &str) -> CreateItemRequest {
        CreateItemRequest {
            title: title.to_string(),
            category: None,
            description: String::new(),
            status: None,
            priority: None,
            due_date: None,
            notes: None,
            subtasks: Vec::new(),
        }
    }

    #[test]
    fn create_defaults() {
        let item = CreateProgressItem::try_from(create("  Book flights ")).unwrap();
        assert_eq!(item.title, "Book flights");
        assert_eq!(item.category, DEFAULT_CATEGORY);
        assert_eq!(item.status, ItemStatus::NotStarted);
        assert_eq!(item.priority, Priority::Medium);
        assert!(item.completed_date.is_none());
    }

    #[test]
    fn create_completed_is_stamped() {
        let mut input = create("Done already");
        input.status = Some("completed".into());
        let item = CreateProgressItem::try_from(input).unwrap();
        assert!(item.completed_date.is_some());
    }

    #[test]
    fn create_rejects_blank_title_and_bad_enums() {
        assert_matches!(
            CreateProgressItem::try_from(create("   ")),
            Err(CoreError::Validation(_))
        );

        let mut input = create("x");
        input.status = Some("finished".into());
        assert_matches!(CreateProgressItem::try_from(input), Err(CoreError::Validation(_)));

        let mut input = create("x");
        input.priority = Some("critical".into());
        assert_matches!(CreateProgressItem::try_from(input), Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_parses_enums() {
        let update = UpdateProgressItem::try_from(UpdateItemRequest {
            status: Some("blocked".into()),
            priority: Some("urgent".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(update.status, Some(ItemStatus::Blocked));
        assert_eq!(update.priority, Some(Priority::Urgent));
        assert!(update.title.is_none());

        assert_matches!(
            UpdateProgressItem::try_from(UpdateItemRequest {
                title: Some(" ".into()),
                ..Default::default()
            }),
            Err(CoreError::Validation(_))
        );
    }
}
