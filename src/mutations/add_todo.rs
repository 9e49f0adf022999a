//! AddTodo Mutation

use serde_json::{json, Value};

use crate::models::Viewer;
use crate::relay::{ClientMutationIds, CommitPipeline, MutationConfig, Operation, OperationKind, RecordSource};

pub static ADD_TODO_MUTATION: Operation = Operation {
    name: "AddTodoMutation",
    kind: OperationKind::Mutation,
    text: r#"mutation AddTodoMutation($input: AddTodoInput!) {
  addTodo(input: $input) {
    todoEdge {
      cursor
      node {
        id
        text
        complete
      }
    }
    viewer {
      id
      totalCount
    }
  }
}"#,
};

/// Id given to the predicted todo until the server assigns the real one
pub fn optimistic_todo_id(client_mutation_id: u64) -> String {
    format!("client:newTodo:{}", client_mutation_id)
}

/// Appends the new edge to the viewer's todo connection
fn append_todo_edge(source: &mut RecordSource, payload: &Value) {
    let Some(added) = payload.get("addTodo") else {
        return;
    };
    let viewer_id = added.pointer("/viewer/id").and_then(Value::as_str);
    if let (Some(viewer_id), Some(edge)) = (viewer_id, added.get("todoEdge")) {
        source.append_edge(viewer_id, "todos", edge);
    }
}

pub fn commit<P: CommitPipeline>(pipeline: &P, ids: &ClientMutationIds, text: &str, viewer: &Viewer) -> P::Submission {
    let client_mutation_id = ids.next_id();

    let optimistic = json!({
        "addTodo": {
            "todoEdge": {
                "node": {
                    "id": optimistic_todo_id(client_mutation_id),
                    "text": text,
                    "complete": false,
                }
            },
            "viewer": {
                "id": viewer.id,
                "totalCount": viewer.total_count + 1,
            }
        }
    });

    pipeline.commit_mutation(MutationConfig {
        mutation: &ADD_TODO_MUTATION,
        variables: json!({ "input": { "text": text, "clientMutationId": client_mutation_id } }),
        optimistic_response: Some(optimistic),
        updater: Some(append_todo_edge),
    })
}
