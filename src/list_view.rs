//! List View Model
//!
//! What the todo list shows for a given state, independent of the DOM.

use crate::models::Todo;
use crate::store::QueryPhase;

pub const LOADING_TEXT: &str = "loading...";
pub const ERROR_TEXT: &str = "error!";
pub const HEADING_TEXT: &str = "Todo List";
pub const ADD_BUTTON_LABEL: &str = "追加";
pub const DELETE_BUTTON_LABEL: &str = "🗑️";
pub const EMPTY_TITLE_WARNING: &str = "todoを入力してください";
pub const DELETE_CONFIRM_PROMPT: &str = "削除しますか？";

/// Outer frame of the list for the current query phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Loading,
    Error,
    /// Query settled without a todo list; nothing is rendered
    Hidden,
    /// Heading, add form and items
    List,
}

impl From<&QueryPhase> for Frame {
    fn from(phase: &QueryPhase) -> Self {
        match phase {
            QueryPhase::Loading => Frame::Loading,
            QueryPhase::Error(_) => Frame::Error,
            QueryPhase::Ready { has_data: false } => Frame::Hidden,
            QueryPhase::Ready { has_data: true } => Frame::List,
        }
    }
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    /// Glyph + title
    pub label: String,
    pub checked: bool,
    /// Strikethrough when completed
    pub struck: bool,
}

impl From<&Todo> for ItemView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            label: todo.label(),
            checked: todo.completed,
            struck: todo.completed,
        }
    }
}

pub fn item_views(todos: &[Todo]) -> Vec<ItemView> {
    todos.iter().map(ItemView::from).collect()
}

/// Key of a rendered row: position, id, checked.
///
/// The position keeps rows with the same id (a double-submitted add) apart;
/// `checked` rebuilds the row when completion changes.
pub type RowKey = (usize, String, bool);

pub fn row_key(index: usize, item: &ItemView) -> RowKey {
    (index, item.id.clone(), item.checked)
}
