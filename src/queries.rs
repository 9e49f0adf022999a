//! Queries
//!
//! The single query the app renders from.

use serde_json::{json, Value};

use crate::models::Viewer;
use crate::relay::{Operation, OperationKind};

/// Large enough to fetch every todo in one page
pub const ALL_TODOS: i64 = 2_147_483_647;

pub static TODO_APP_QUERY: Operation = Operation {
    name: "TodoAppQuery",
    kind: OperationKind::Query,
    text: r#"query TodoAppQuery($status: String, $first: Int) {
  viewer {
    id
    totalCount
    completedCount
    todos(status: $status, first: $first) {
      edges {
        cursor
        node {
          id
          text
          complete
        }
      }
    }
  }
}"#,
};

pub fn todo_app_variables() -> Value {
    json!({ "status": "any", "first": ALL_TODOS })
}

/// Typed viewer from the root record, if the query has been loaded
pub fn read_viewer(root: Option<Value>) -> Option<Viewer> {
    let viewer = root?.get("viewer")?.clone();
    serde_json::from_value(viewer).ok()
}
