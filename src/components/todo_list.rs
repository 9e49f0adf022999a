//! Todo List Component

use leptos::prelude::*;

use super::TodoItem;
use crate::context::use_app_context;
use crate::models::{Todo, Viewer};
use crate::mutations::mark_all_todos;

#[component]
pub fn TodoList(viewer: Memo<Option<Viewer>>) -> impl IntoView {
    let ctx = use_app_context();

    let todos = move || viewer.with(|viewer| viewer.as_ref().map(Viewer::todo_list).unwrap_or_default());
    let all_complete = move || {
        viewer.with(|viewer| {
            viewer
                .as_ref()
                .map_or(false, |v| v.total_count > 0 && v.total_count == v.completed_count)
        })
    };

    let toggle_all = move |_| {
        let complete = !all_complete();
        if let Some(viewer) = viewer.get_untracked() {
            ctx.commit(|env, ids| mark_all_todos::commit(env, ids, complete, &viewer.todo_list(), &viewer));
        }
    };

    view! {
        <section class="main">
            <input id="toggle-all" class="toggle-all" type="checkbox" prop:checked=all_complete on:change=toggle_all />
            <label for="toggle-all">"Mark all as complete"</label>
            <ul class="todo-list">
                <For
                    each=todos
                    key=|todo: &Todo| todo.clone()
                    children=move |todo: Todo| view! { <TodoItem todo=todo viewer=viewer /> }
                />
            </ul>
        </section>
    }
}
