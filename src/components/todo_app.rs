//! Todo App Component
//!
//! Header with the new-todo input, the list and the footer counters.

use leptos::prelude::*;

use super::{TodoList, TodoTextInput};
use crate::context::use_app_context;
use crate::models::Viewer;
use crate::mutations::{add_todo, remove_completed_todos};

fn items_left(remaining: i64) -> String {
    if remaining == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", remaining)
    }
}

#[component]
pub fn TodoApp(viewer: Memo<Option<Viewer>>) -> impl IntoView {
    let ctx = use_app_context();

    let add = move |text: String| {
        if let Some(viewer) = viewer.get_untracked() {
            ctx.commit(|env, ids| add_todo::commit(env, ids, &text, &viewer));
        }
    };

    let clear_completed = move |_| {
        if let Some(viewer) = viewer.get_untracked() {
            ctx.commit(|env, ids| remove_completed_todos::commit(env, ids, &viewer.todo_list(), &viewer));
        }
    };

    let total = move || viewer.with(|v| v.as_ref().map_or(0, |v| v.total_count));
    let completed = move || viewer.with(|v| v.as_ref().map_or(0, |v| v.completed_count));

    view! {
        <header class="header">
            <h1>"todos"</h1>
            <TodoTextInput
                class="new-todo"
                placeholder="What needs to be done?"
                on_save=add
            />
        </header>

        <TodoList viewer=viewer />

        <Show when=move || { total() > 0 }>
            <footer class="footer">
                <span class="todo-count">{move || items_left(total() - completed())}</span>
                <Show when=move || { completed() > 0 }>
                    <button class="clear-completed" on:click=clear_completed>
                        "Clear completed"
                    </button>
                </Show>
            </footer>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_left_pluralization() {
        assert_eq!(items_left(0), "0 items left");
        assert_eq!(items_left(1), "1 item left");
        assert_eq!(items_left(3), "3 items left");
    }
}
