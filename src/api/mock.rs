//! In-memory todo service and scripted dialogs for tests.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, ApiResult, Dialogs, TodoService};
use crate::models::Todo;

/// Behaves like the GraphQL server, seeded with two open todos
pub struct MockTodoService {
    todos: Mutex<Vec<Todo>>,
    next_id: AtomicU32,
    pub fail_list: AtomicBool,
    pub fail_mutations: AtomicBool,
    /// Mutations answer with a null payload
    pub null_payloads: AtomicBool,
    /// List query answers `{ todos: null }`
    pub null_list: AtomicBool,
    pub list_calls: AtomicU32,
    pub mutation_calls: AtomicU32,
}

impl MockTodoService {
    pub fn new() -> Self {
        Self::with_todos(vec![
            Todo::new("1", "todo1", false),
            Todo::new("2", "todo2", false),
        ])
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            next_id: AtomicU32::new(todos.len() as u32 + 1),
            todos: Mutex::new(todos),
            fail_list: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            null_payloads: AtomicBool::new(false),
            null_list: AtomicBool::new(false),
            list_calls: AtomicU32::new(0),
            mutation_calls: AtomicU32::new(0),
        }
    }

    pub fn server_todos(&self) -> Vec<Todo> {
        self.todos.lock().unwrap().clone()
    }

    fn begin_mutation(&self) -> ApiResult<bool> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(ApiError::Status(500));
        }
        Ok(!self.null_payloads.load(Ordering::SeqCst))
    }
}

#[async_trait(?Send)]
impl TodoService for MockTodoService {
    async fn list_todos(&self) -> ApiResult<Option<Vec<Todo>>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        if self.null_list.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(Some(self.server_todos()))
    }

    async fn add_todo(&self, title: &str) -> ApiResult<Option<Todo>> {
        if !self.begin_mutation()? {
            return Ok(None);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        let todo = Todo::new(id, title, false);
        self.todos.lock().unwrap().push(todo.clone());
        Ok(Some(todo))
    }

    async fn update_todo(&self, id: &str, completed: bool) -> ApiResult<Option<Todo>> {
        if !self.begin_mutation()? {
            return Ok(None);
        }
        let mut todos = self.todos.lock().unwrap();
        Ok(todos.iter_mut().find(|t| t.id == id).map(|t| {
            t.completed = completed;
            t.clone()
        }))
    }

    async fn delete_todo(&self, id: &str) -> ApiResult<Option<Todo>> {
        if !self.begin_mutation()? {
            return Ok(None);
        }
        let mut todos = self.todos.lock().unwrap();
        let index = todos.iter().position(|t| t.id == id);
        Ok(index.map(|i| todos.remove(i)))
    }
}

/// Dialogs answering from a script and recording what was shown
pub struct ScriptedDialogs {
    pub confirm_answer: AtomicBool,
    pub alerts: Mutex<Vec<String>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn answering(confirm_answer: bool) -> Self {
        Self {
            confirm_answer: AtomicBool::new(confirm_answer),
            alerts: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.confirm_answer.load(Ordering::SeqCst)
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
