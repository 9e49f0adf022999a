//! Todo Frontend App
//!
//! Builds the environment, loads the query and renders the todo app.

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TodoApp;
use crate::context::AppContext;
use crate::queries::{todo_app_variables, TODO_APP_QUERY};
use crate::relay::{Environment, HttpNetwork, Spawner};

/// Same-origin endpoint; the dev server proxies it to the GraphQL server
pub const GRAPHQL_ENDPOINT: &str = "/graphql";

#[component]
pub fn App() -> impl IntoView {
    let spawner: Spawner = Arc::new(|task: LocalBoxFuture<'static, ()>| spawn_local(task));
    let environment = Environment::new(Arc::new(HttpNetwork::new(GRAPHQL_ENDPOINT)), spawner);

    let (version, set_version) = signal(0u32);
    environment.subscribe(move || set_version.update(|v| *v += 1));

    let ctx = AppContext::new(environment.clone(), version);
    provide_context(ctx);

    let (load_error, set_load_error) = signal::<Option<String>>(None);

    // Load the todo list once on mount
    spawn_local(async move {
        match environment.fetch_query(&TODO_APP_QUERY, todo_app_variables()).await {
            Ok(()) => web_sys::console::log_1(&"[APP] Todo list loaded".into()),
            Err(e) => {
                web_sys::console::error_1(&format!("[APP] Failed to load todos: {}", e).into());
                set_load_error.set(Some(e.to_string()));
            }
        }
    });

    let viewer = Memo::new(move |_| ctx.viewer());

    view! {
        <section class="todoapp">
            <Show
                when=move || viewer.with(Option::is_some)
                fallback=move || view! {
                    <p class="loading">
                        {move || load_error.get().unwrap_or_else(|| "Loading...".to_string())}
                    </p>
                }
            >
                <TodoApp viewer=viewer />
            </Show>
        </section>
        <footer class="info">
            <p>"Double-click to edit a todo"</p>
        </footer>
    }
}
