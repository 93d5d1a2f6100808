//! Application Context
//!
//! Shared collaborators provided via Leptos Context API.

use std::sync::Arc;

use reactive_stores::Store;

use crate::api::{Dialogs, TodoService};
use crate::controller::{TodoListController, ViewController};
use crate::store::TodoListState;

/// Service client and dialogs injected into every todo list
#[derive(Clone)]
pub struct AppContext {
    pub api: Arc<dyn TodoService>,
    pub dialogs: Arc<dyn Dialogs>,
}

impl AppContext {
    pub fn new(api: Arc<dyn TodoService>, dialogs: Arc<dyn Dialogs>) -> Self {
        Self { api, dialogs }
    }

    /// Controller for a list whose state lives in `state`
    pub fn controller(&self, state: Store<TodoListState>) -> ViewController {
        TodoListController::new(self.api.clone(), self.dialogs.clone(), state)
    }
}
