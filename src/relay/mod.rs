//! Commit Pipeline
//!
//! Normalized record store, optimistic layers and the network glue that
//! mutations are submitted through.

mod environment;
mod mutation;
mod network;
mod store;

pub use environment::{Environment, PendingSubmission, Spawner, SubmissionStatus};
pub use mutation::{ClientMutationIds, CommitPipeline, MutationConfig, Operation, OperationKind, Updater};
pub use network::{GraphQLResponse, HttpNetwork, Network, NetworkError, OperationRequest};
pub use store::{LayerId, Record, RecordSource, Store, MUTATION_ROOT_ID, ROOT_ID};
