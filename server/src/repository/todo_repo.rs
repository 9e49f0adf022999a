//! Todo Repository
//!
//! In-memory store for the viewer's todos. Todos keep insertion order and
//! ids are handed out from 0 upwards, never reused.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Todo, User, VIEWER_ID};

#[derive(Debug, Default)]
struct TodoTable {
    next_id: u32,
    todos: Vec<Todo>,
}

impl TodoTable {
    fn insert(&mut self, text: String, complete: bool) -> Todo {
        let todo = Todo::new(self.next_id, text, complete);
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    fn find_mut(&mut self, id: u32) -> DomainResult<&mut Todo> {
        self.todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: u32) -> DomainError {
    DomainError::NotFound(format!("Todo {}", id))
}

/// Shared handle; clones see the same todos
#[derive(Debug, Clone, Default)]
pub struct TodoRepository {
    table: Arc<Mutex<TodoTable>>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a todo and return it with its assigned id
    pub async fn add_todo(&self, text: String, complete: bool) -> Todo {
        self.table.lock().await.insert(text, complete)
    }

    pub async fn change_todo_complete(&self, id: u32, complete: bool) -> DomainResult<Todo> {
        let mut table = self.table.lock().await;
        let todo = table.find_mut(id)?;
        todo.complete = complete;
        Ok(todo.clone())
    }

    pub async fn get_todo(&self, id: u32) -> DomainResult<Todo> {
        self.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// All todos, or only those whose `complete` equals the filter
    pub async fn get_todos(&self, complete: Option<bool>) -> Vec<Todo> {
        let table = self.table.lock().await;
        table
            .todos
            .iter()
            .filter(|todo| complete.map_or(true, |wanted| todo.complete == wanted))
            .cloned()
            .collect()
    }

    /// Set `complete` on every todo; returns only the todos that changed
    pub async fn mark_all_todos(&self, complete: bool) -> Vec<Todo> {
        let mut table = self.table.lock().await;
        let mut changed = Vec::new();
        for todo in table.todos.iter_mut().filter(|todo| todo.complete != complete) {
            todo.complete = complete;
            changed.push(todo.clone());
        }
        changed
    }

    pub async fn remove_todo(&self, id: u32) -> DomainResult<()> {
        self.delete(id).await
    }

    /// Drop every completed todo; returns their ids in list order
    pub async fn remove_completed_todos(&self) -> Vec<u32> {
        let mut table = self.table.lock().await;
        let removed = table
            .todos
            .iter()
            .filter(|todo| todo.complete)
            .map(|todo| todo.id)
            .collect();
        table.todos.retain(|todo| !todo.complete);
        removed
    }

    pub async fn rename_todo(&self, id: u32, text: String) -> DomainResult<Todo> {
        let mut table = self.table.lock().await;
        let todo = table.find_mut(id)?;
        todo.text = text;
        Ok(todo.clone())
    }

    pub async fn get_user(&self, id: &str) -> DomainResult<User> {
        if id == VIEWER_ID {
            Ok(User::viewer())
        } else {
            Err(DomainError::NotFound(format!("User {}", id)))
        }
    }

    pub async fn total_count(&self) -> usize {
        self.table.lock().await.todos.len()
    }

    pub async fn completed_count(&self) -> usize {
        self.table.lock().await.todos.iter().filter(|todo| todo.complete).count()
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        Ok(self.add_todo(entity.text.clone(), entity.complete).await)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Todo>> {
        let table = self.table.lock().await;
        Ok(table.todos.iter().find(|todo| todo.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        Ok(self.get_todos(None).await)
    }

    async fn update(&self, entity: &Todo) -> DomainResult<Todo> {
        let mut table = self.table.lock().await;
        let todo = table.find_mut(entity.id)?;
        *todo = entity.clone();
        Ok(todo.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut table = self.table.lock().await;
        let before = table.todos.len();
        table.todos.retain(|todo| todo.id != id);
        if table.todos.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
