//! Todo Item Component
//!
//! One row of the list: checkbox, label (double-click to rename) and a
//! destroy button.

use leptos::prelude::*;

use super::TodoTextInput;
use crate::context::use_app_context;
use crate::models::{Todo, Viewer};
use crate::mutations::{change_todo_status, remove_todo, rename_todo};

#[component]
pub fn TodoItem(todo: Todo, viewer: Memo<Option<Viewer>>) -> impl IntoView {
    let ctx = use_app_context();
    let (editing, set_editing) = signal(false);

    let complete = todo.complete;
    let text = todo.text.clone();
    let todo = StoredValue::new(todo);

    let remove = move || {
        if let Some(viewer) = viewer.get_untracked() {
            ctx.commit(|env, ids| todo.with_value(|todo| remove_todo::commit(env, ids, todo, &viewer)));
        }
    };

    let toggle = move |_| {
        if let Some(viewer) = viewer.get_untracked() {
            ctx.commit(|env, ids| {
                todo.with_value(|todo| change_todo_status::commit(env, ids, !todo.complete, todo, &viewer))
            });
        }
    };

    let rename = move |new_text: String| {
        ctx.commit(|env, ids| todo.with_value(|todo| rename_todo::commit(env, ids, &new_text, todo)));
        set_editing.set(false);
    };

    let item_class = move || match (complete, editing.get()) {
        (_, true) => "editing",
        (true, false) => "completed",
        (false, false) => "",
    };

    view! {
        <li class=item_class>
            <div class="view">
                <input class="toggle" type="checkbox" checked=complete on:change=toggle />
                <label on:dblclick=move |_| set_editing.set(true)>{text}</label>
                <button class="destroy" on:click=move |_| remove()></button>
            </div>
            <Show when=move || editing.get()>
                <TodoTextInput
                    class="edit"
                    commit_on_blur=true
                    initial_value=todo.with_value(|todo| todo.text.clone())
                    on_save=rename
                    on_cancel=move |_: ()| set_editing.set(false)
                    on_delete=move |_: ()| {
                        set_editing.set(false);
                        remove();
                    }
                />
            </Show>
        </li>
    }
}
