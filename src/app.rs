//! Todo List Frontend App
//!
//! Wires the GraphQL client and browser dialogs into context and mounts the list.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{BrowserDialogs, GraphqlTodoService};
use crate::components::TodoList;
use crate::config::ClientConfig;
use crate::context::AppContext;

/// Origin of the current page, e.g. "http://localhost:3000"
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let service = GraphqlTodoService::new(config.resolved_endpoint(page_origin().as_deref()));
    tracing::info!("[APP] Using GraphQL endpoint {}", service.endpoint());

    provide_context(AppContext::new(Arc::new(service), Arc::new(BrowserDialogs)));

    view! {
        <main class="app-layout">
            <TodoList />
        </main>
    }
}
