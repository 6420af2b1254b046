#![allow(warnings)]
//! Task Board Frontend Entry Point

mod error;
mod models;
mod format;
mod storage;
mod completion;
mod toast;
mod view_state;
mod render;
mod config;
mod dom;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use dom::PageAnchors;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    // Pages without the task board (login, profile, ...) load this script too
    let Some(page) = PageAnchors::locate() else {
        tracing::debug!("task board anchors not found, nothing to mount");
        return;
    };

    let tasks = page.read_tasks();
    let config = page.read_config();
    let email = page.account_email();
    tracing::info!(tasks = tasks.len(), "starting task board frontend");

    page.remove_server_list();
    leptos::mount::mount_to(page.mount, move || view! { <App tasks=tasks config=config email=email /> })
        .forget();
}
