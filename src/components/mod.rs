//! UI Components
//!
//! Leptos components for the todo app.

mod todo_app;
mod todo_item;
mod todo_list;
mod todo_text_input;

pub use todo_app::TodoApp;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use todo_text_input::TodoTextInput;
