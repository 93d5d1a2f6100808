//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The transitions
//! on `TodoListState` are plain methods so they run the same inside and
//! outside the reactive runtime.

use reactive_stores::Store;

use crate::api::ApiResult;
use crate::list_view::{item_views, Frame, ItemView};
use crate::models::Todo;

/// Phase of the list query
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryPhase {
    #[default]
    Loading,
    /// Query failed; the view stays on the error text
    Error(String),
    /// Query settled; `has_data` is false when the payload had no list
    Ready { has_data: bool },
}

/// State owned by one mounted todo list
#[derive(Clone, Debug, Default, Store)]
pub struct TodoListState {
    pub phase: QueryPhase,
    /// Local mirror of the server list, patched by mutation results
    pub todos: Vec<Todo>,
    /// Text field of the add form
    pub title: String,
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a settled list query. A successful result replaces the local list.
    pub fn resolve_query(&mut self, result: ApiResult<Option<Vec<Todo>>>) {
        match result {
            Ok(data) => {
                self.phase = QueryPhase::Ready { has_data: data.is_some() };
                self.todos = data.unwrap_or_default();
            }
            Err(e) => {
                self.phase = QueryPhase::Error(e.to_string());
            }
        }
    }

    /// Apply an add result. Returns true when the list should be refetched.
    pub fn apply_added(&mut self, added: Option<Todo>) -> bool {
        match added {
            Some(todo) => {
                append_todo(&mut self.todos, todo);
                self.title.clear();
                true
            }
            None => false,
        }
    }

    pub fn apply_updated(&mut self, updated: Option<Todo>) {
        if let Some(todo) = updated {
            replace_todo(&mut self.todos, todo);
        }
    }

    pub fn apply_deleted(&mut self, deleted: Option<Todo>) {
        if let Some(todo) = deleted {
            remove_todo(&mut self.todos, &todo.id);
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::from(&self.phase)
    }

    pub fn items(&self) -> Vec<ItemView> {
        item_views(&self.todos)
    }
}

// ========================
// Reconciliation Helpers
// ========================

/// Append a todo (no duplicate check)
pub fn append_todo(todos: &mut Vec<Todo>, todo: Todo) {
    todos.push(todo);
}

/// Replace every entry with the same id by the given todo
pub fn replace_todo(todos: &mut [Todo], updated: Todo) {
    todos
        .iter_mut()
        .filter(|todo| todo.id == updated.id)
        .for_each(|todo| *todo = updated.clone());
}

/// Remove every entry with the given id
pub fn remove_todo(todos: &mut Vec<Todo>, todo_id: &str) {
    todos.retain(|todo| todo.id != todo_id);
}
