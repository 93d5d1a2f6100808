//! Todo List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod list_view;
mod logging;
mod models;
mod store;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_env();
    if let Err(e) = logging::init_logger(config.level()) {
        web_sys::console::warn_1(&format!("[APP] Logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
