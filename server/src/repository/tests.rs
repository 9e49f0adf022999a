//! Repository Integration Tests
//!
//! Tests for TodoRepository.

use crate::domain::{DomainError, Todo};
use crate::repository::{Repository, TodoRepository};

async fn setup_repo() -> TodoRepository {
    let repo = TodoRepository::new();
    repo.add_todo("Taste JavaScript".to_string(), true).await;
    repo.add_todo("Buy a unicorn".to_string(), false).await;
    repo
}

#[tokio::test]
async fn test_ids_are_sequential_from_zero() {
    let repo = TodoRepository::new();
    let first = repo.add_todo("a".to_string(), false).await;
    let second = repo.add_todo("b".to_string(), false).await;

    assert_eq!(first.id, 0);
    assert_eq!(second.id, 1);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let repo = setup_repo().await;
    repo.remove_todo(1).await.expect("Remove failed");

    let created = repo.add_todo("c".to_string(), false).await;
    assert_eq!(created.id, 2);
}

#[tokio::test]
async fn test_get_todos_filters_by_status() {
    let repo = setup_repo().await;

    assert_eq!(repo.get_todos(None).await.len(), 2);
    let done = repo.get_todos(Some(true)).await;
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].text, "Taste JavaScript");
    assert_eq!(repo.get_todos(Some(false)).await[0].text, "Buy a unicorn");
}

#[tokio::test]
async fn test_change_todo_complete() {
    let repo = setup_repo().await;

    let changed = repo.change_todo_complete(1, true).await.expect("Change failed");
    assert!(changed.complete);
    assert_eq!(repo.completed_count().await, 2);
}

#[tokio::test]
async fn test_mark_all_returns_only_changed() {
    let repo = setup_repo().await;

    let changed = repo.mark_all_todos(true).await;
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].id, 1);

    assert!(repo.mark_all_todos(true).await.is_empty());
    assert_eq!(repo.completed_count().await, 2);
}

#[tokio::test]
async fn test_remove_completed() {
    let repo = setup_repo().await;

    let removed = repo.remove_completed_todos().await;
    assert_eq!(removed, vec![0]);
    assert_eq!(repo.total_count().await, 1);
    assert!(repo.find_by_id(0).await.unwrap().is_none());
}

#[tokio::test]
async fn test_rename_keeps_status() {
    let repo = setup_repo().await;

    let renamed = repo.rename_todo(0, "Taste Rust".to_string()).await.expect("Rename failed");
    assert_eq!(renamed.text, "Taste Rust");
    assert!(renamed.complete);
    assert_eq!(repo.get_todo(0).await.unwrap().text, "Taste Rust");
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let repo = setup_repo().await;

    assert!(matches!(repo.rename_todo(42, "x".to_string()).await, Err(DomainError::NotFound(_))));
    assert!(matches!(repo.change_todo_complete(42, true).await, Err(DomainError::NotFound(_))));
    assert!(matches!(repo.remove_todo(42).await, Err(DomainError::NotFound(_))));
    assert!(matches!(repo.get_todo(42).await, Err(DomainError::NotFound(_))));
    assert!(matches!(repo.get_user("someone").await, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_crud_through_repository_trait() {
    let repo = TodoRepository::new();

    let created = repo.create(&Todo::new(99, "Original".to_string(), false)).await.unwrap();
    assert_eq!(created.id, 0);

    let mut updated = created.clone();
    updated.text = "Updated".to_string();
    updated.complete = true;
    let updated = repo.update(&updated).await.expect("Update failed");
    assert_eq!(updated.text, "Updated");

    assert_eq!(repo.list().await.unwrap().len(), 1);
    repo.delete(created.id).await.expect("Delete failed");
    assert!(repo.list().await.unwrap().is_empty());
}
