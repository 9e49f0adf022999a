//! Frontend Models
//!
//! Typed views over the records the query reads.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches the server's `Todo` type)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub complete: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            complete: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoEdge {
    #[serde(default)]
    pub cursor: Option<String>,
    /// `None` once the node has been deleted locally
    #[serde(default)]
    pub node: Option<Todo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TodoConnection {
    #[serde(default)]
    pub edges: Vec<TodoEdge>,
}

/// The signed-in user and their todos
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    pub id: String,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub completed_count: i64,
    #[serde(default)]
    pub todos: TodoConnection,
}

impl Viewer {
    /// Todos still present, in connection order
    pub fn todo_list(&self) -> Vec<Todo> {
        self.todos
            .edges
            .iter()
            .filter_map(|edge| edge.node.clone())
            .collect()
    }

    pub fn remaining_count(&self) -> i64 {
        self.total_count - self.completed_count
    }
}
