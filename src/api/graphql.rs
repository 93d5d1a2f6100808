//! GraphQL Client
//!
//! `TodoService` over HTTP: every call POSTs `{ query, variables }` to the
//! configured endpoint and unwraps the `{ data, errors }` envelope.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResult, TodoService};
use crate::models::Todo;

// ========================
// Documents
// ========================

const TODOS_QUERY: &str = "query Todos { todos { id title completed } }";

const ADD_TODO_MUTATION: &str = "mutation AddTodo($title: String!) { \
    addTodo(title: $title) { id title completed } }";

const UPDATE_TODO_MUTATION: &str = "mutation UpdateTodo($todoId: ID!, $completed: Boolean!) { \
    updateTodo(todoId: $todoId, completed: $completed) { id title completed } }";

const DELETE_TODO_MUTATION: &str = "mutation DeleteTodo($todoId: ID!) { \
    deleteTodo(todoId: $todoId) { id title completed } }";

// ========================
// Wire Structs
// ========================

#[derive(Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Serialize)]
struct NoArgs {}

#[derive(Serialize)]
struct AddTodoArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct UpdateTodoArgs<'a> {
    #[serde(rename = "todoId")]
    todo_id: &'a str,
    completed: bool,
}

#[derive(Serialize)]
struct TodoIdArgs<'a> {
    #[serde(rename = "todoId")]
    todo_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct TodosData {
    todos: Option<Vec<Todo>>,
}

#[derive(Debug, Deserialize)]
struct AddTodoData {
    #[serde(rename = "addTodo")]
    add_todo: Option<Todo>,
}

#[derive(Debug, Deserialize)]
struct UpdateTodoData {
    #[serde(rename = "updateTodo")]
    update_todo: Option<Todo>,
}

#[derive(Debug, Deserialize)]
struct DeleteTodoData {
    #[serde(rename = "deleteTodo")]
    delete_todo: Option<Todo>,
}

/// Unwrap a GraphQL response body into its `data` field
fn decode_response<T: DeserializeOwned>(body: &str) -> ApiResult<Option<T>> {
    let response: GraphqlResponse<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    match response.errors {
        Some(errors) if !errors.is_empty() => {
            Err(ApiError::Graphql(errors.into_iter().map(|e| e.message).collect()))
        }
        _ => Ok(response.data),
    }
}

// ========================
// Client
// ========================

/// Todo service backed by a GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphqlTodoService {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlTodoService {
    /// `endpoint` must be an absolute URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<V, T>(&self, query: &str, variables: V) -> ApiResult<Option<T>>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_response(&body)
    }
}

#[async_trait(?Send)]
impl TodoService for GraphqlTodoService {
    async fn list_todos(&self) -> ApiResult<Option<Vec<Todo>>> {
        let data: Option<TodosData> = self.execute(TODOS_QUERY, NoArgs {}).await?;
        Ok(data.and_then(|d| d.todos))
    }

    async fn add_todo(&self, title: &str) -> ApiResult<Option<Todo>> {
        let data: Option<AddTodoData> = self
            .execute(ADD_TODO_MUTATION, AddTodoArgs { title })
            .await?;
        Ok(data.and_then(|d| d.add_todo))
    }

    async fn update_todo(&self, id: &str, completed: bool) -> ApiResult<Option<Todo>> {
        let data: Option<UpdateTodoData> = self
            .execute(UPDATE_TODO_MUTATION, UpdateTodoArgs { todo_id: id, completed })
            .await?;
        Ok(data.and_then(|d| d.update_todo))
    }

    async fn delete_todo(&self, id: &str) -> ApiResult<Option<Todo>> {
        let data: Option<DeleteTodoData> = self
            .execute(DELETE_TODO_MUTATION, TodoIdArgs { todo_id: id })
            .await?;
        Ok(data.and_then(|d| d.delete_todo))
    }
}
