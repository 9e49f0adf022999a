//! Mutation Descriptors
//!
//! The data a commit pipeline consumes: which operation to run, its
//! variables, and the locally predicted payload.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use super::store::RecordSource;

/// Whether an operation reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A named GraphQL operation.
///
/// The server dispatches on `name`; `text` travels with the request so the
/// payload is a regular GraphQL request body.
#[derive(Debug, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub kind: OperationKind,
    pub text: &'static str,
}

/// Applies a mutation payload to the record source.
///
/// Runs on the optimistic payload while the request is in flight and again on
/// the server payload once it arrives.
pub type Updater = fn(&mut RecordSource, &Value);

/// Everything a pipeline needs to submit one mutation
#[derive(Debug, Clone)]
pub struct MutationConfig {
    pub mutation: &'static Operation,
    pub variables: Value,
    pub optimistic_response: Option<Value>,
    pub updater: Option<Updater>,
}

/// Accepts a mutation and returns a handle for the in-flight submission.
pub trait CommitPipeline {
    type Submission;

    fn commit_mutation(&self, config: MutationConfig) -> Self::Submission;
}

/// Source of `clientMutationId` values.
///
/// Starts at 0 and only ever moves forward, so ids are unique for the
/// lifetime of the instance. One instance is shared by every mutation of an
/// application.
#[derive(Debug, Default)]
pub struct ClientMutationIds {
    next: AtomicU64,
}

impl ClientMutationIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let ids = ClientMutationIds::new();
        let taken: Vec<u64> = (0..5).map(|_| ids.next_id()).collect();
        assert_eq!(taken, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_separate_sequences_are_independent() {
        let a = ClientMutationIds::new();
        let b = ClientMutationIds::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), 0);
        assert_eq!(a.next_id(), 2);
    }
}
