//! Environment
//!
//! The commit pipeline used by the application: owns the record store,
//! applies optimistic payloads, sends operations over the network and
//! reconciles or rolls back when the response arrives.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::LocalBoxFuture;
use serde_json::Value;

use super::mutation::{CommitPipeline, MutationConfig, Operation};
use super::network::{Network, NetworkError, OperationRequest};
use super::store::{LayerId, Store, ROOT_ID};

/// Runs a detached future on the current thread
pub type Spawner = Arc<dyn Fn(LocalBoxFuture<'static, ()>) + Send + Sync>;

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Where a submitted mutation stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Pending,
    Committed,
    RolledBack(String),
}

/// Handle for an in-flight mutation
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    layer: LayerId,
    status: Arc<Mutex<SubmissionStatus>>,
}

impl PendingSubmission {
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    pub fn status(&self) -> SubmissionStatus {
        lock(&self.status).clone()
    }

    pub fn is_pending(&self) -> bool {
        self.status() == SubmissionStatus::Pending
    }
}

struct Inner {
    network: Arc<dyn Network + Send + Sync>,
    spawner: Spawner,
    store: Mutex<Store>,
    listeners: Mutex<Vec<Listener>>,
}

/// Shared handle; clones refer to the same store
#[derive(Clone)]
pub struct Environment {
    inner: Arc<Inner>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("pending_layers", &lock(&self.inner.store).pending_layers())
            .finish()
    }
}

impl Environment {
    pub fn new(network: Arc<dyn Network + Send + Sync>, spawner: Spawner) -> Self {
        Self {
            inner: Arc::new(Inner {
                network,
                spawner,
                store: Mutex::new(Store::new()),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Called after every change to the visible records
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) {
        lock(&self.inner.listeners).push(Arc::new(listener));
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = lock(&self.inner.listeners).clone();
        for listener in listeners {
            listener();
        }
    }

    /// Read a record with references resolved
    pub fn read(&self, id: &str) -> Option<Value> {
        lock(&self.inner.store).source().read(id)
    }

    /// Read the root query record
    pub fn read_root(&self) -> Option<Value> {
        self.read(ROOT_ID)
    }

    pub fn pending_layers(&self) -> usize {
        lock(&self.inner.store).pending_layers()
    }

    /// Run a query and publish the result under the root record
    pub async fn fetch_query(&self, query: &'static Operation, variables: Value) -> Result<(), NetworkError> {
        let data = self
            .inner
            .network
            .execute(OperationRequest::new(query, variables))
            .await?;
        lock(&self.inner.store).publish_query(&data);
        self.notify();
        Ok(())
    }

    fn settle(&self, config: &MutationConfig, layer: LayerId, result: Result<Value, NetworkError>) -> SubmissionStatus {
        let status = {
            let mut store = lock(&self.inner.store);
            match result {
                Ok(data) => {
                    store.commit(layer, &data, config.updater);
                    SubmissionStatus::Committed
                }
                Err(e) => {
                    store.rollback(layer);
                    SubmissionStatus::RolledBack(e.to_string())
                }
            }
        };
        self.notify();
        status
    }
}

impl CommitPipeline for Environment {
    type Submission = PendingSubmission;

    fn commit_mutation(&self, config: MutationConfig) -> PendingSubmission {
        let layer = lock(&self.inner.store).push_optimistic(config.optimistic_response.clone(), config.updater);
        self.notify();

        let submission = PendingSubmission {
            layer,
            status: Arc::new(Mutex::new(SubmissionStatus::Pending)),
        };

        let env = self.clone();
        let status = submission.status.clone();
        let request = OperationRequest::new(config.mutation, config.variables.clone());
        (self.inner.spawner)(Box::pin(async move {
            let result = env.inner.network.execute(request).await;
            let settled = env.settle(&config, layer, result);
            *lock(&status) = settled;
        }));

        submission
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
