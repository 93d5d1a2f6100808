//! UI Components
//!
//! Leptos components for the todo list.

mod new_todo_form;
mod todo_item;
mod todo_list;

pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
