//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::models::Viewer;
use crate::queries::read_viewer;
use crate::relay::{ClientMutationIds, Environment};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    environment: StoredValue<Environment>,
    mutation_ids: StoredValue<Arc<ClientMutationIds>>,
    /// Bumped every time the environment's visible records change
    pub version: ReadSignal<u32>,
}

impl AppContext {
    pub fn new(environment: Environment, version: ReadSignal<u32>) -> Self {
        Self {
            environment: StoredValue::new(environment),
            mutation_ids: StoredValue::new(Arc::new(ClientMutationIds::new())),
            version,
        }
    }

    /// Current viewer; tracks `version`
    pub fn viewer(&self) -> Option<Viewer> {
        self.version.track();
        read_viewer(self.environment.with_value(Environment::read_root))
    }

    /// Run a mutation's `commit` against the app environment
    pub fn commit<R>(&self, submit: impl FnOnce(&Environment, &ClientMutationIds) -> R) -> R {
        let environment = self.environment.get_value();
        let ids = self.mutation_ids.get_value();
        submit(&environment, &ids)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
