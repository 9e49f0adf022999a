//! MarkAllTodos Mutation

use serde_json::{json, Value};

use crate::models::{Todo, Viewer};
use crate::relay::{ClientMutationIds, CommitPipeline, MutationConfig, Operation, OperationKind};

pub static MARK_ALL_TODOS_MUTATION: Operation = Operation {
    name: "MarkAllTodosMutation",
    kind: OperationKind::Mutation,
    text: r#"mutation MarkAllTodosMutation($input: MarkAllTodosInput!) {
  markAllTodos(input: $input) {
    changedTodos {
      id
      complete
    }
    viewer {
      id
      completedCount
    }
  }
}"#,
};

pub fn commit<P: CommitPipeline>(
    pipeline: &P,
    ids: &ClientMutationIds,
    complete: bool,
    todos: &[Todo],
    viewer: &Viewer,
) -> P::Submission {
    let changed: Vec<Value> = todos
        .iter()
        .filter(|todo| todo.complete != complete)
        .map(|todo| json!({ "id": todo.id, "complete": complete }))
        .collect();

    let completed_count = if complete { viewer.total_count } else { 0 };

    let optimistic = json!({
        "markAllTodos": {
            "changedTodos": changed,
            "viewer": {
                "id": viewer.id,
                "completedCount": completed_count,
            },
        }
    });

    pipeline.commit_mutation(MutationConfig {
        mutation: &MARK_ALL_TODOS_MUTATION,
        variables: json!({ "input": { "complete": complete, "clientMutationId": ids.next_id() } }),
        optimistic_response: Some(optimistic),
        updater: None,
    })
}
