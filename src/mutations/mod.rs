//! Mutations
//!
//! Each mutation takes its `clientMutationId` from the shared
//! [`ClientMutationIds`](crate::relay::ClientMutationIds), predicts the
//! server payload and hands both to a commit pipeline.

pub mod add_todo;
pub mod change_todo_status;
pub mod mark_all_todos;
pub mod remove_completed_todos;
pub mod remove_todo;
pub mod rename_todo;

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use serde_json::{json, Value};

    use crate::models::Viewer;
    use crate::relay::{CommitPipeline, MutationConfig};

    /// Pipeline that records configs and hands back their index
    #[derive(Default)]
    pub struct RecordingPipeline {
        configs: RefCell<Vec<MutationConfig>>,
    }

    impl RecordingPipeline {
        pub fn configs(&self) -> Vec<MutationConfig> {
            self.configs.borrow().clone()
        }
    }

    impl CommitPipeline for RecordingPipeline {
        type Submission = usize;

        fn commit_mutation(&self, config: MutationConfig) -> usize {
            let mut configs = self.configs.borrow_mut();
            configs.push(config);
            configs.len() - 1
        }
    }

    pub fn sample_query_data() -> Value {
        json!({
            "viewer": {
                "id": "VXNlcjptZQ==",
                "totalCount": 2,
                "completedCount": 1,
                "todos": {
                    "edges": [
                        { "cursor": "YXJyYXljb25uZWN0aW9uOjA=", "node": { "id": "t1", "text": "write code", "complete": false } },
                        { "cursor": "YXJyYXljb25uZWN0aW9uOjE=", "node": { "id": "t2", "text": "ship it", "complete": true } }
                    ]
                }
            }
        })
    }

    pub fn sample_viewer() -> Viewer {
        serde_json::from_value(sample_query_data()["viewer"].clone()).unwrap()
    }
}
