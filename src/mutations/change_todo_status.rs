//! ChangeTodoStatus Mutation

use serde_json::json;

use crate::models::{Todo, Viewer};
use crate::relay::{ClientMutationIds, CommitPipeline, MutationConfig, Operation, OperationKind};

pub static CHANGE_TODO_STATUS_MUTATION: Operation = Operation {
    name: "ChangeTodoStatusMutation",
    kind: OperationKind::Mutation,
    text: r#"mutation ChangeTodoStatusMutation($input: ChangeTodoStatusInput!) {
  changeTodoStatus(input: $input) {
    todo {
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
    todo: &Todo,
    viewer: &Viewer,
) -> P::Submission {
    let delta = match (todo.complete, complete) {
        (false, true) => 1,
        (true, false) => -1,
        _ => 0,
    };

    let optimistic = json!({
        "changeTodoStatus": {
            "todo": { "id": todo.id, "complete": complete },
            "viewer": { "id": viewer.id, "completedCount": viewer.completed_count + delta },
        }
    });

    pipeline.commit_mutation(MutationConfig {
        mutation: &CHANGE_TODO_STATUS_MUTATION,
        variables: json!({
            "input": { "id": todo.id, "complete": complete, "clientMutationId": ids.next_id() }
        }),
        optimistic_response: Some(optimistic),
        updater: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutations::test_support::{sample_viewer, RecordingPipeline};

    #[test]
    fn test_completing_bumps_completed_count() {
        let pipeline = RecordingPipeline::default();
        let ids = ClientMutationIds::new();
        let viewer = sample_viewer();
        let todo = viewer.todo_list()[0].clone();

        commit(&pipeline, &ids, true, &todo, &viewer);

        let config = &pipeline.configs()[0];
        assert_eq!(config.variables["input"], json!({ "id": "t1", "complete": true, "clientMutationId": 0 }));
        let predicted = config.optimistic_response.as_ref().unwrap();
        assert_eq!(predicted["changeTodoStatus"]["todo"]["complete"], true);
        assert_eq!(predicted["changeTodoStatus"]["viewer"]["completedCount"], 2);
    }

    #[test]
    fn test_unchanged_status_keeps_count() {
        let pipeline = RecordingPipeline::default();
        let ids = ClientMutationIds::new();
        let viewer = sample_viewer();
        let todo = viewer.todo_list()[1].clone();

        commit(&pipeline, &ids, true, &todo, &viewer);

        let predicted = pipeline.configs()[0].optimistic_response.clone().unwrap();
        assert_eq!(predicted["changeTodoStatus"]["viewer"]["completedCount"], 1);
    }
}
