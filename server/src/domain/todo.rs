//! Todo Entity
//!
//! A task for the viewer to complete.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, Entity};

/// Filter accepted by the `todos` connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    Any,
    Active,
    Completed,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Any => "any",
            TodoStatus::Active => "active",
            TodoStatus::Completed => "completed",
        }
    }

    /// `complete` value to filter on; `None` keeps every todo
    pub fn complete_filter(&self) -> Option<bool> {
        match self {
            TodoStatus::Any => None,
            TodoStatus::Active => Some(false),
            TodoStatus::Completed => Some(true),
        }
    }
}

impl std::str::FromStr for TodoStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(TodoStatus::Any),
            "active" => Ok(TodoStatus::Active),
            "completed" => Ok(TodoStatus::Completed),
            other => Err(DomainError::InvalidInput(format!("unknown todo status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Local identifier, unique within the repository
    pub id: u32,
    pub text: String,
    pub complete: bool,
}

impl Todo {
    pub fn new(id: u32, text: String, complete: bool) -> Self {
        Self { id, text, complete }
    }
}

impl Entity for Todo {
    type Id = u32;

    const TYPE_NAME: &'static str = "Todo";

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(3, "Test todo".to_string(), false);
        assert_eq!(todo.id(), 3);
        assert_eq!(todo.text, "Test todo");
        assert!(!todo.complete);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("active".parse::<TodoStatus>(), Ok(TodoStatus::Active));
        assert_eq!(TodoStatus::Completed.complete_filter(), Some(true));
        assert_eq!(TodoStatus::Any.as_str(), "any");
        assert!(matches!("done".parse::<TodoStatus>(), Err(DomainError::InvalidInput(_))));
    }
}
