//! Frontend Models
//!
//! Data structures matching the remote todo service.

use serde::Deserialize;

/// Todo data structure (matches the `Todo` GraphQL type)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
        }
    }

    /// Status glyph shown before the title
    pub fn status_glyph(&self) -> &'static str {
        if self.completed { "✅" } else { "👀" }
    }

    /// Display label, e.g. "👀 buy milk"
    pub fn label(&self) -> String {
        format!("{} {}", self.status_glyph(), self.title)
    }
}
