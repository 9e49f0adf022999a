//! RenameTodo Mutation
//!
//! Proposes new text for an existing todo and predicts the result so the
//! list shows the new text before the server answers.

use serde_json::{json, Value};

use crate::models::Todo;
use crate::relay::{ClientMutationIds, CommitPipeline, MutationConfig, Operation, OperationKind};

pub static RENAME_TODO_MUTATION: Operation = Operation {
    name: "RenameTodoMutation",
    kind: OperationKind::Mutation,
    text: r#"mutation RenameTodoMutation($input: RenameTodoInput!) {
  renameTodo(input: $input) {
    todo {
      id
      text
    }
  }
}"#,
};

/// The predicted `renameTodo` payload: the todo's id with the new text.
/// Nothing else is guessed.
fn optimistic_response(text: &str, todo: &Todo) -> Value {
    json!({
        "renameTodo": {
            "todo": {
                "id": todo.id,
                "text": text,
            }
        }
    })
}

/// Submit a rename of `todo` to `text`.
///
/// Every call takes a fresh `clientMutationId` from `ids`, even when the
/// arguments repeat. `text` is sent as given; an empty string is valid here.
pub fn commit<P: CommitPipeline>(pipeline: &P, ids: &ClientMutationIds, text: &str, todo: &Todo) -> P::Submission {
    let variables = json!({
        "input": {
            "id": todo.id,
            "text": text,
            "clientMutationId": ids.next_id(),
        }
    });

    pipeline.commit_mutation(MutationConfig {
        mutation: &RENAME_TODO_MUTATION,
        variables,
        optimistic_response: Some(optimistic_response(text, todo)),
        updater: None,
    })
}
