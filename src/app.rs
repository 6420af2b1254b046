//! Task Board App
//!
//! Main application component: task list on the left, the view box on the
//! right, toast and profile popover on top.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ProfilePopover, SortBar, TaskList, TaskViewBox, Toast};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Task;
use crate::store::{store_dispatch, AppState, AppStateStoreFields};
use crate::view_state::ViewEvent;

#[component]
pub fn App(tasks: Vec<Task>, config: AppConfig, email: Option<String>) -> impl IntoView {
    let ctx = AppContext::new(config);

    // Completion overlay from local storage
    let completed = ctx.completion.restore(&tasks);
    tracing::debug!(completed = completed.len(), "restored completion state");

    let store = Store::new(AppState::new(tasks, completed));

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    let layout = Memo::new(move |_| {
        let tasks = store.tasks().read();
        store.view().read().layout(&tasks)
    });

    // Clicks that reach the document close whatever panel is open
    commands::on_document_click(move |_| store_dispatch(&store, ViewEvent::ClickOutside));

    let on_add = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        store_dispatch(&store, ViewEvent::ClickAdd);
    };

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <h1>"To-Do"</h1>
                <SortBar />
                <ProfilePopover email=email />
            </header>

            <main class="main-content">
                // Left: task list
                <section class="task-column">
                    <button id="add-task" type="button" title="Add Task" on:click=on_add>
                        <span class="material-symbols-outlined">"add"</span>
                        " Add Task"
                    </button>
                    <TaskList layout=layout />
                </section>

                // Right: empty view, add form, details or edit form
                <TaskViewBox layout=layout />
            </main>

            <Toast />
        </div>
    }
}
