//! RemoveCompletedTodos Mutation

use serde_json::{json, Value};

use crate::models::{Todo, Viewer};
use crate::relay::{ClientMutationIds, CommitPipeline, MutationConfig, Operation, OperationKind, RecordSource};

pub static REMOVE_COMPLETED_TODOS_MUTATION: Operation = Operation {
    name: "RemoveCompletedTodosMutation",
    kind: OperationKind::Mutation,
    text: r#"mutation RemoveCompletedTodosMutation($input: RemoveCompletedTodosInput!) {
  removeCompletedTodos(input: $input) {
    deletedTodoIds
    viewer {
      id
      totalCount
      completedCount
    }
  }
}"#,
};

fn delete_completed(source: &mut RecordSource, payload: &Value) {
    let Some(removed) = payload.get("removeCompletedTodos") else {
        return;
    };
    let Some(viewer_id) = removed.pointer("/viewer/id").and_then(Value::as_str) else {
        return;
    };
    let deleted = removed
        .get("deletedTodoIds")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str);
    for todo_id in deleted {
        source.remove_edge(viewer_id, "todos", todo_id);
        source.delete(todo_id);
    }
}

pub fn commit<P: CommitPipeline>(pipeline: &P, ids: &ClientMutationIds, todos: &[Todo], viewer: &Viewer) -> P::Submission {
    let deleted: Vec<&str> = todos
        .iter()
        .filter(|todo| todo.complete)
        .map(|todo| todo.id.as_str())
        .collect();
    let total_count = viewer.total_count - deleted.len() as i64;

    let optimistic = json!({
        "removeCompletedTodos": {
            "deletedTodoIds": deleted,
            "viewer": {
                "id": viewer.id,
                "totalCount": total_count,
                "completedCount": 0,
            },
        }
    });

    pipeline.commit_mutation(MutationConfig {
        mutation: &REMOVE_COMPLETED_TODOS_MUTATION,
        variables: json!({ "input": { "clientMutationId": ids.next_id() } }),
        optimistic_response: Some(optimistic),
        updater: Some(delete_completed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutations::test_support::{sample_query_data, sample_viewer, RecordingPipeline};
    use crate::relay::{Store, ROOT_ID};

    #[test]
    fn test_completed_todos_disappear() {
        let pipeline = RecordingPipeline::default();
        let ids = ClientMutationIds::new();
        let viewer = sample_viewer();
        commit(&pipeline, &ids, &viewer.todo_list(), &viewer);
        let config = pipeline.configs().remove(0);

        assert_eq!(
            config.optimistic_response.as_ref().unwrap()["removeCompletedTodos"]["deletedTodoIds"],
            json!(["t2"])
        );

        let mut store = Store::new();
        store.publish_query(&sample_query_data());
        store.push_optimistic(config.optimistic_response, config.updater);

        let root = store.source().read(ROOT_ID).unwrap();
        let edges = root["viewer"]["todos"]["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0]["node"]["id"], "t1");
        assert_eq!(root["viewer"]["totalCount"], 1);
    }
}
