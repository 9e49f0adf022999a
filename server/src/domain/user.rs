//! User Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Id of the only user; every request acts as this viewer
pub const VIEWER_ID: &str = "me";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

impl User {
    pub fn viewer() -> Self {
        Self { id: VIEWER_ID.to_string() }
    }
}

impl Entity for User {
    type Id = String;

    const TYPE_NAME: &'static str = "User";

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
