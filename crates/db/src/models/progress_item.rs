//! Progress item entity model and DTOs.

use relocate_core::progress_items::{ItemStatus, Priority, Subtask, TrackedItem};
use relocate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use relocate_core::progress_items::NewProgressItem as CreateProgressItem;

/// Row from `progress_items`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ProgressItem {
    pub id: DbId,
    pub user_id: DbId,
    pub category: String,
    pub title: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: ItemStatus,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    pub due_date: Option<Timestamp>,
    pub completed_date: Option<Timestamp>,
    pub notes: Option<String>,
    #[sqlx(json)]
    pub subtasks: Vec<Subtask>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TrackedItem for ProgressItem {
    fn category(&self) -> &str {
        &self.category
    }

    fn status(&self) -> ItemStatus {
        self.status
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn due_date(&self) -> Option<Timestamp> {
        self.due_date
    }
}

/// Partial update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProgressItem {
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ItemStatus>,
    pub priority: Option<Priority>,
    pub due_date: Option<Timestamp>,
    pub notes: Option<String>,
}

impl ProgressItem {
    /// Apply `update` in place, following the `completed_date` rule.
    pub fn apply_update(&mut self, update: &UpdateProgressItem, now: Timestamp) {
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(status) = update.status {
            self.completed_date = relocate_core::progress_items::apply_status_change(
                self.status,
                status,
                self.completed_date,
                now,
            );
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(notes) = &update.notes {
            self.notes = Some(notes.clone());
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn item(status: ItemStatus, completed_date: Option<Timestamp>) -> ProgressItem {
        let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        ProgressItem {
            id: 1,
            user_id: 1,
            category: "Housing".into(),
            title: "Find a flat".into(),
            description: String::new(),
            status,
            priority: Priority::Medium,
            due_date: None,
            completed_date,
            notes: None,
            subtasks: Vec::new(),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn completing_stamps_completed_date() {
        let now = Utc::now();
        let mut it = item(ItemStatus::InProgress, None);
        it.apply_update(
            &UpdateProgressItem {
                status: Some(ItemStatus::Completed),
                ..Default::default()
            },
            now,
        );
        assert_eq!(it.completed_date, Some(now));
        assert_eq!(it.updated_at, now);
    }

    #[test]
    fn reopening_clears_completed_date() {
        let now = Utc::now();
        let mut it = item(ItemStatus::Completed, Some(now - Duration::days(2)));
        it.apply_update(
            &UpdateProgressItem {
                status: Some(ItemStatus::InProgress),
                ..Default::default()
            },
            now,
        );
        assert_eq!(it.completed_date, None);
    }

    #[test]
    fn notes_only_update_keeps_status_and_date() {
        let now = Utc::now();
        let done = now - Duration::days(2);
        let mut it = item(ItemStatus::Completed, Some(done));
        it.apply_update(
            &UpdateProgressItem {
                notes: Some("keep receipts".into()),
                ..Default::default()
            },
            now,
        );
        assert_eq!(it.status, ItemStatus::Completed);
        assert_eq!(it.completed_date, Some(done));
        assert_eq!(it.notes.as_deref(), Some("keep receipts"));
    }
}
