//! Repository Layer
//!
//! Data access abstractions and implementations.

mod todo_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use todo_repo::TodoRepository;
pub use traits::Repository;
