//! Remote Todo Service
//!
//! The list query and the add/update/delete mutations the view depends on,
//! plus the blocking dialogs it asks the user through.

mod dialog;
mod graphql;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use crate::models::Todo;

pub use dialog::{BrowserDialogs, Dialogs};
pub use graphql::GraphqlTodoService;

/// Common result type for service calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors reported by the todo service client
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response (network, CORS, bad URL)
    Transport(String),
    /// Non-success HTTP status
    Status(u16),
    /// Response carried a GraphQL `errors` array
    Graphql(Vec<String>),
    /// Response body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ApiError::Graphql(messages) => write!(f, "GraphQL error: {}", messages.join("; ")),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client for the remote todo service.
///
/// `Ok(None)` means the service answered with a null payload: for the list
/// query there is no `todos` field, for mutations nothing was added, updated
/// or deleted.
///
/// Futures are not `Send`: the browser client runs on the single WASM thread.
#[async_trait(?Send)]
pub trait TodoService: Send + Sync {
    /// Fetch the authoritative todo list
    async fn list_todos(&self) -> ApiResult<Option<Vec<Todo>>>;

    /// Create a todo with the given title
    async fn add_todo(&self, title: &str) -> ApiResult<Option<Todo>>;

    /// Set the completion flag of a todo
    async fn update_todo(&self, id: &str, completed: bool) -> ApiResult<Option<Todo>>;

    /// Delete a todo by id
    async fn delete_todo(&self, id: &str) -> ApiResult<Option<Todo>>;
}
