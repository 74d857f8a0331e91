use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use relocate_core::error::CoreError;
use relocate_core::progress::apply_completion;
use relocate_core::progress_items::toggle_subtask;
use relocate_core::types::{DbId, StepId, Timestamp};
use tokio::sync::Mutex;

use super::{Store, StoreResult};
use crate::models::password_reset::{CreatePasswordReset, PasswordReset};
use crate::models::progress::{ProgressChange, ProgressLog};
use crate::models::progress_item::{CreateProgressItem, ProgressItem, UpdateProgressItem};
use crate::models::user::{CreateUser, User};

/// In-process [`Store`].
///
/// One mutex guards all tables, so every operation (including the
/// read-modify-write in `set_completed`) is atomic. Data is lost on
/// restart.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    next_id: DbId,
    users: BTreeMap<DbId, User>,
    progress: HashMap<DbId, Vec<StepId>>,
    logs: Vec<ProgressLog>,
    resets: Vec<PasswordReset>,
    items: BTreeMap<DbId, ProgressItem>,
}

impl MemoryState {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn owned_item_mut(&mut self, user_id: DbId, id: DbId) -> Option<&mut ProgressItem> {
        self.items.get_mut(&id).filter(|item| item.user_id == user_id)
    }

    fn insert_item(&mut self, user_id: DbId, input: &CreateProgressItem) -> ProgressItem {
        let now = Utc::now();
        let item = ProgressItem {
            id: self.next_id(),
            user_id,
            category: input.category.clone(),
            title: input.title.clone(),
            description: input.description.clone(),
            status: input.status,
            priority: input.priority,
            due_date: input.due_date,
            completed_date: input.completed_date,
            notes: input.notes.clone(),
            subtasks: input.subtasks.clone(),
            created_at: now,
            updated_at: now,
        };
        self.items.insert(item.id, item.clone());
        item
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        let mut state = self.state.lock().await;
        if state.users.values().any(|u| u.username == input.username) {
            return Err(CoreError::Conflict(format!(
                "Username '{}' is already taken",
                input.username
            ))
            .into());
        }

        let now = Utc::now();
        let user = User {
            id: state.next_id(),
            username: input.username.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id, user.clone());

        let mut steps = Vec::new();
        for step in &input.initial_completed_steps {
            apply_completion(&mut steps, *step, true);
        }
        state.progress.insert(user.id, steps);

        for item in &input.initial_items {
            state.insert_item(user.id, item);
        }
        Ok(user)
    }

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(self.state.lock().await.users.get(&id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.values().find(|u| u.username == username).cloned())
    }

    async fn update_password(&self, user_id: DbId, password_hash: &str) -> StoreResult<bool> {
        let mut state = self.state.lock().await;
        let Some(user) = state.users.get_mut(&user_id) else {
            return Ok(false);
        };
        user.password_hash = password_hash.to_string();
        user.updated_at = Utc::now();
        Ok(true)
    }

    async fn set_user_active(&self, user_id: DbId, is_active: bool) -> StoreResult<bool> {
        let mut state = self.state.lock().await;
        let Some(user) = state.users.get_mut(&user_id) else {
            return Ok(false);
        };
        user.is_active = is_active;
        user.updated_at = Utc::now();
        Ok(true)
    }

    async fn get_completed(&self, user_id: DbId) -> StoreResult<Option<Vec<StepId>>> {
        Ok(self.state.lock().await.progress.get(&user_id).cloned())
    }

    async fn set_completed(&self, change: &ProgressChange) -> StoreResult<Option<Vec<StepId>>> {
        let mut state = self.state.lock().await;
        let Some(steps) = state.progress.get_mut(&change.user_id) else {
            return Ok(None);
        };
        apply_completion(steps, change.step_id, change.completed);
        let steps = steps.clone();

        let id = state.next_id();
        state.logs.push(ProgressLog {
            id,
            user_id: change.user_id,
            step_id: change.step_id,
            completed: change.completed,
            notes: change.notes.clone(),
            created_at: Utc::now(),
        });
        Ok(Some(steps))
    }

    async fn reset_progress(&self, user_id: DbId) -> StoreResult<bool> {
        let mut state = self.state.lock().await;
        let Some(steps) = state.progress.get_mut(&user_id) else {
            return Ok(false);
        };
        steps.clear();
        state.logs.retain(|log| log.user_id != user_id);
        Ok(true)
    }

    async fn progress_logs(&self, user_id: DbId) -> StoreResult<Vec<ProgressLog>> {
        let state = self.state.lock().await;
        Ok(state
            .logs
            .iter()
            .filter(|log| log.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_password_reset(
        &self,
        input: &CreatePasswordReset,
    ) -> StoreResult<PasswordReset> {
        let mut state = self.state.lock().await;
        let reset = PasswordReset {
            id: state.next_id(),
            user_id: input.user_id,
            code_hash: input.code_hash.clone(),
            expires_at: input.expires_at,
            created_at: Utc::now(),
        };
        state.resets.push(reset.clone());
        Ok(reset)
    }

    async fn find_password_reset(
        &self,
        user_id: DbId,
        code_hash: &str,
    ) -> StoreResult<Option<PasswordReset>> {
        let state = self.state.lock().await;
        Ok(state
            .resets
            .iter()
            .rev()
            .find(|r| r.user_id == user_id && r.code_hash == code_hash)
            .cloned())
    }

    async fn delete_password_reset(&self, id: DbId) -> StoreResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.resets.len();
        state.resets.retain(|r| r.id != id);
        Ok(state.resets.len() < before)
    }

    async fn delete_password_resets_for_user(&self, user_id: DbId) -> StoreResult<u64> {
        let mut state = self.state.lock().await;
        let before = state.resets.len();
        state.resets.retain(|r| r.user_id != user_id);
        Ok((before - state.resets.len()) as u64)
    }

    async fn list_items(&self, user_id: DbId) -> StoreResult<Vec<ProgressItem>> {
        let state = self.state.lock().await;
        Ok(state
            .items
            .values()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_item(
        &self,
        user_id: DbId,
        input: &CreateProgressItem,
    ) -> StoreResult<ProgressItem> {
        Ok(self.state.lock().await.insert_item(user_id, input))
    }

    async fn update_item(
        &self,
        user_id: DbId,
        id: DbId,
        input: &UpdateProgressItem,
        now: Timestamp,
    ) -> StoreResult<Option<ProgressItem>> {
        let mut state = self.state.lock().await;
        Ok(state.owned_item_mut(user_id, id).map(|item| {
            item.apply_update(input, now);
            item.clone()
        }))
    }

    async fn toggle_subtask(
        &self,
        user_id: DbId,
        id: DbId,
        index: usize,
        now: Timestamp,
    ) -> StoreResult<Option<ProgressItem>> {
        let mut state = self.state.lock().await;
        let Some(item) = state.owned_item_mut(user_id, id) else {
            return Ok(None);
        };
        toggle_subtask(&mut item.subtasks, index)?;
        item.updated_at = now;
        Ok(Some(item.clone()))
    }

    async fn delete_item(&self, user_id: DbId, id: DbId) -> StoreResult<bool> {
        let mut state = self.state.lock().await;
        if state.owned_item_mut(user_id, id).is_none() {
            return Ok(false);
        }
        Ok(state.items.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use relocate_core::progress_items::{seed_items, ItemStatus, Priority, Subtask};

    use super::*;
    use crate::store::StoreError;

    fn new_user(username: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: None,
            password_hash: "hash".to_string(),
            initial_completed_steps: Vec::new(),
            initial_items: Vec::new(),
        }
    }

    fn change(user_id: DbId, step_id: StepId, completed: bool) -> ProgressChange {
        ProgressChange {
            user_id,
            step_id,
            completed,
            notes: None,
        }
    }

    fn item_input() -> CreateProgressItem {
        CreateProgressItem {
            category: "Housing".into(),
            title: "Book viewing".into(),
            description: String::new(),
            status: ItemStatus::NotStarted,
            priority: Priority::High,
            due_date: None,
            completed_date: None,
            notes: None,
            subtasks: vec![Subtask {
                task: "Call agent".into(),
                completed: false,
            }],
        }
    }

    #[tokio::test]
    async fn new_user_starts_with_empty_progress() {
        let store = MemoryStore::new();
        let user = store.create_user(&new_user("alice")).await.unwrap();
        assert_eq!(store.get_completed(user.id).await.unwrap(), Some(vec![]));
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let store = MemoryStore::new();
        store.create_user(&new_user("alice")).await.unwrap();
        let err = store.create_user(&new_user("alice")).await.unwrap_err();
        assert_matches!(err, StoreError::Core(CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn initial_steps_are_deduplicated() {
        let store = MemoryStore::new();
        let mut input = new_user("bob");
        input.initial_completed_steps = vec![1, 2, 2, 3];
        let user = store.create_user(&input).await.unwrap();
        assert_eq!(store.get_completed(user.id).await.unwrap(), Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn set_completed_is_idempotent_and_logs_every_call() {
        let store = MemoryStore::new();
        let user = store.create_user(&new_user("alice")).await.unwrap();

        let first = store.set_completed(&change(user.id, 5, true)).await.unwrap();
        let second = store.set_completed(&change(user.id, 5, true)).await.unwrap();
        assert_eq!(first, Some(vec![5]));
        assert_eq!(first, second);
        assert_eq!(store.progress_logs(user.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn add_then_remove_restores_set() {
        let store = MemoryStore::new();
        let mut input = new_user("alice");
        input.initial_completed_steps = vec![1, 2];
        let user = store.create_user(&input).await.unwrap();

        store.set_completed(&change(user.id, 7, true)).await.unwrap();
        store.set_completed(&change(user.id, 7, false)).await.unwrap();
        assert_eq!(store.get_completed(user.id).await.unwrap(), Some(vec![1, 2]));
    }

    #[tokio::test]
    async fn unknown_user_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_completed(42).await.unwrap(), None);
        assert_eq!(store.set_completed(&change(42, 1, true)).await.unwrap(), None);
        assert!(!store.reset_progress(42).await.unwrap());
        assert!(store.progress_logs(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reset_clears_steps_and_logs() {
        let store = MemoryStore::new();
        let alice = store.create_user(&new_user("alice")).await.unwrap();
        let bob = store.create_user(&new_user("bob")).await.unwrap();
        store.set_completed(&change(alice.id, 1, true)).await.unwrap();
        store.set_completed(&change(bob.id, 1, true)).await.unwrap();

        assert!(store.reset_progress(alice.id).await.unwrap());
        assert_eq!(store.get_completed(alice.id).await.unwrap(), Some(vec![]));
        assert!(store.progress_logs(alice.id).await.unwrap().is_empty());
        assert_eq!(store.progress_logs(bob.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_toggles_do_not_lose_writes() {
        let store = Arc::new(MemoryStore::new());
        let user_id = store.create_user(&new_user("alice")).await.unwrap().id;

        let handles: Vec<_> = (1..=20)
            .map(|step| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store.set_completed(&change(user_id, step, true)).await.unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let mut steps = store.get_completed(user_id).await.unwrap().unwrap();
        steps.sort_unstable();
        assert_eq!(steps, (1..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn seeded_items_are_created_with_the_user() {
        let store = MemoryStore::new();
        let mut input = new_user("alice");
        input.initial_items = seed_items(Utc::now());
        let user = store.create_user(&input).await.unwrap();
        assert_eq!(store.list_items(user.id).await.unwrap().len(), 12);
    }

    #[tokio::test]
    async fn items_are_scoped_to_their_owner() {
        let store = MemoryStore::new();
        let alice = store.create_user(&new_user("alice")).await.unwrap();
        let bob = store.create_user(&new_user("bob")).await.unwrap();
        let item = store.create_item(alice.id, &item_input()).await.unwrap();

        let update = UpdateProgressItem {
            status: Some(ItemStatus::Completed),
            ..Default::default()
        };
        assert!(store.update_item(bob.id, item.id, &update, Utc::now()).await.unwrap().is_none());
        assert!(!store.delete_item(bob.id, item.id).await.unwrap());
        assert!(store.list_items(bob.id).await.unwrap().is_empty());
        assert!(store.delete_item(alice.id, item.id).await.unwrap());
    }

    #[tokio::test]
    async fn toggle_subtask_bounds() {
        let store = MemoryStore::new();
        let user = store.create_user(&new_user("alice")).await.unwrap();
        let item = store.create_item(user.id, &item_input()).await.unwrap();

        let toggled = store
            .toggle_subtask(user.id, item.id, 0, Utc::now())
            .await
            .unwrap()
            .unwrap();
        assert!(toggled.subtasks[0].completed);

        let err = store
            .toggle_subtask(user.id, item.id, 3, Utc::now())
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::Core(CoreError::Validation(_)));
        assert!(store.toggle_subtask(user.id, 999, 0, Utc::now()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deactivate_user() {
        let store = MemoryStore::new();
        let user = store.create_user(&new_user("alice")).await.unwrap();

        assert!(store.set_user_active(user.id, false).await.unwrap());
        assert!(!store.find_user_by_id(user.id).await.unwrap().unwrap().is_active);
        assert!(!store.set_user_active(999, false).await.unwrap());
    }

    #[tokio::test]
    async fn password_reset_lookup_and_cleanup() {
        let store = MemoryStore::new();
        let user = store.create_user(&new_user("alice")).await.unwrap();
        let reset = store
            .create_password_reset(&CreatePasswordReset {
                user_id: user.id,
                code_hash: "abc".into(),
                expires_at: Utc::now(),
            })
            .await
            .unwrap();

        assert!(store.find_password_reset(user.id, "nope").await.unwrap().is_none());
        let found = store.find_password_reset(user.id, "abc").await.unwrap().unwrap();
        assert_eq!(found.id, reset.id);
        assert_eq!(store.delete_password_resets_for_user(user.id).await.unwrap(), 1);
        assert!(!store.delete_password_reset(reset.id).await.unwrap());
    }
}
