//! GraphQL Layer
//!
//! Relay-compatible object identification, connections and the operations
//! the frontend sends.

pub mod connection;
pub mod global_id;
pub mod operations;
pub mod request;
pub mod schema;

pub use operations::execute;
pub use request::{GraphQLError, GraphQLRequest, GraphQLResponse};
pub use schema::schema_sdl;
