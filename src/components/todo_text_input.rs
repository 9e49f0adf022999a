//! Todo Text Input Component
//!
//! Text field shared by the "new todo" header and the inline editor.

use leptos::prelude::*;

/// Text input that commits on Enter (and optionally on blur).
///
/// Committed text is trimmed. Empty text calls `on_delete` when given and is
/// otherwise ignored; text equal to `initial_value` calls `on_cancel`.
#[component]
pub fn TodoTextInput(
    #[prop(into)] class: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] initial_value: String,
    #[prop(optional)] commit_on_blur: bool,
    #[prop(into)] on_save: Callback<String>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
    #[prop(optional, into)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let initial = StoredValue::new(initial_value.clone());
    let (text, set_text) = signal(initial_value);

    let commit_changes = move || {
        let new_text = text.get_untracked().trim().to_string();
        match decide(&new_text, &initial.get_value(), on_delete.is_some(), on_cancel.is_some()) {
            Decision::Delete => {
                if let Some(on_delete) = on_delete {
                    on_delete.run(());
                }
            }
            Decision::Cancel => {
                if let Some(on_cancel) = on_cancel {
                    on_cancel.run(());
                }
            }
            Decision::Save => {
                on_save.run(new_text);
                set_text.set(String::new());
            }
            Decision::Ignore => {}
        }
    };

    view! {
        <input
            type="text"
            class=class
            placeholder=placeholder
            autofocus=true
            prop:value=move || text.get()
            on:input=move |ev| set_text.set(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                "Enter" => commit_changes(),
                "Escape" => {
                    if let Some(on_cancel) = on_cancel {
                        on_cancel.run(());
                    }
                }
                _ => {}
            }
            on:blur=move |_| {
                if commit_on_blur {
                    commit_changes();
                }
            }
        />
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Decision {
    Save,
    Cancel,
    Delete,
    Ignore,
}

fn decide(new_text: &str, initial: &str, can_delete: bool, can_cancel: bool) -> Decision {
    if new_text.is_empty() {
        if can_delete {
            Decision::Delete
        } else {
            Decision::Ignore
        }
    } else if can_cancel && new_text == initial {
        Decision::Cancel
    } else {
        Decision::Save
    }
}
