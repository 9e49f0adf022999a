//! RemoveTodo Mutation

use serde_json::{json, Value};

use crate::models::{Todo, Viewer};
use crate::relay::{ClientMutationIds, CommitPipeline, MutationConfig, Operation, OperationKind, RecordSource};

pub static REMOVE_TODO_MUTATION: Operation = Operation {
    name: "RemoveTodoMutation",
    kind: OperationKind::Mutation,
    text: r#"mutation RemoveTodoMutation($input: RemoveTodoInput!) {
  removeTodo(input: $input) {
    deletedTodoId
    viewer {
      id
      totalCount
      completedCount
    }
  }
}"#,
};

/// Deletes the removed todo and its edge
fn delete_todo(source: &mut RecordSource, payload: &Value) {
    let Some(removed) = payload.get("removeTodo") else {
        return;
    };
    let todo_id = removed.get("deletedTodoId").and_then(Value::as_str);
    let viewer_id = removed.pointer("/viewer/id").and_then(Value::as_str);
    if let (Some(todo_id), Some(viewer_id)) = (todo_id, viewer_id) {
        source.remove_edge(viewer_id, "todos", todo_id);
        source.delete(todo_id);
    }
}

pub fn commit<P: CommitPipeline>(pipeline: &P, ids: &ClientMutationIds, todo: &Todo, viewer: &Viewer) -> P::Submission {
    let completed_count = viewer.completed_count - i64::from(todo.complete);

    let optimistic = json!({
        "removeTodo": {
            "deletedTodoId": todo.id,
            "viewer": {
                "id": viewer.id,
                "totalCount": viewer.total_count - 1,
                "completedCount": completed_count,
            },
        }
    });

    pipeline.commit_mutation(MutationConfig {
        mutation: &REMOVE_TODO_MUTATION,
        variables: json!({ "input": { "id": todo.id, "clientMutationId": ids.next_id() } }),
        optimistic_response: Some(optimistic),
        updater: Some(delete_todo),
    })
}
