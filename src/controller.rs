//! Todo List Controller
//!
//! Drives the query and the three user actions against the injected
//! service, applying each settled result to the list state.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{Dialogs, TodoService};
use crate::list_view::{DELETE_CONFIRM_PROMPT, EMPTY_TITLE_WARNING};
use crate::store::TodoListState;

/// Somewhere the list state lives.
///
/// `None` once the state is gone (the list was unmounted while a call was
/// in flight); the settled result is then dropped.
pub trait StateCell: Clone + 'static {
    fn with_state<R>(&self, f: impl FnOnce(&mut TodoListState) -> R) -> Option<R>;
}

impl StateCell for Store<TodoListState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut TodoListState) -> R) -> Option<R> {
        self.try_write().map(|mut state| f(&mut *state))
    }
}

/// Controller bound to the reactive store used by the components
pub type ViewController = TodoListController<Store<TodoListState>>;

#[derive(Clone)]
pub struct TodoListController<S> {
    api: Arc<dyn TodoService>,
    dialogs: Arc<dyn Dialogs>,
    state: S,
}

impl<S: StateCell> TodoListController<S> {
    pub fn new(api: Arc<dyn TodoService>, dialogs: Arc<dyn Dialogs>, state: S) -> Self {
        Self { api, dialogs, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Run the list query and replace the local list with its result.
    /// Used on mount and as the refetch after an add.
    pub async fn load(&self) {
        let result = self.api.list_todos().await;
        match &result {
            Ok(Some(todos)) => tracing::debug!("[TODO] Loaded {} todos", todos.len()),
            Ok(None) => tracing::debug!("[TODO] List query returned no data"),
            Err(e) => tracing::error!("[TODO] List query failed: {}", e),
        }
        self.state.with_state(|state| state.resolve_query(result));
    }

    pub fn set_title(&self, title: String) {
        self.state.with_state(|state| state.title = title);
    }

    /// Add a todo from the current text field value
    pub async fn submit(&self) {
        let Some(title) = self.state.with_state(|state| state.title.clone()) else {
            return;
        };
        if title.is_empty() {
            self.dialogs.alert(EMPTY_TITLE_WARNING);
            return;
        }

        let added = match self.api.add_todo(&title).await {
            Ok(added) => added,
            Err(e) => {
                tracing::warn!("[TODO] Add failed: {}", e);
                return;
            }
        };

        if self.state.with_state(|state| state.apply_added(added)).unwrap_or(false) {
            self.load().await;
        }
    }

    /// Set a todo's completion flag
    pub async fn toggle(&self, todo_id: String, completed: bool) {
        match self.api.update_todo(&todo_id, completed).await {
            Ok(updated) => {
                self.state.with_state(|state| state.apply_updated(updated));
            }
            Err(e) => tracing::warn!("[TODO] Update of {} failed: {}", todo_id, e),
        }
    }

    /// Delete a todo after the user confirms
    pub async fn delete(&self, todo_id: String) {
        if !self.dialogs.confirm(DELETE_CONFIRM_PROMPT) {
            return;
        }

        match self.api.delete_todo(&todo_id).await {
            Ok(deleted) => {
                self.state.with_state(|state| state.apply_deleted(deleted));
            }
            Err(e) => tracing::warn!("[TODO] Delete of {} failed: {}", todo_id, e),
        }
    }
}
