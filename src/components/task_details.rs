//! Task Details Component
//!
//! Read-only view of the selected task with edit and delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, AfterDelete, DeleteStart};
use crate::context::use_app_context;
use crate::models::Task;
use crate::render::render_details_html;
use crate::store::{store_dispatch, use_app_store};
use crate::view_state::ViewEvent;

#[component]
pub fn TaskDetails(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (deleting, set_deleting) = signal(false);

    // Escaped markup; only the controls below are live elements
    let markup = render_details_html(&task);
    let id = task.id;

    let on_delete = move |_: web_sys::MouseEvent| {
        let config = ctx.config();
        let start = commands::begin_delete(deleting.get_untracked(), || {
            commands::confirm(&config.delete_confirm_message)
        });
        if start != DeleteStart::Send { return; }

        set_deleting.set(true);
        let id = id.clone();
        spawn_local(async move {
            let result = commands::delete_task(&config, &id).await;
            match commands::finish_delete(result, &ctx.toasts, &config) {
                AfterDelete::Reload => commands::reload(),
                AfterDelete::ShowError(toast) => {
                    set_deleting.set(false);
                    ctx.show_toast(toast);
                }
            }
        });
    };

    view! {
        <div id="task-details" class="task-details-box">
            <div class="task-details-content" inner_html=markup></div>
            <div class="buttons">
                <button
                    id="edit-task-btn"
                    type="button"
                    title="Edit Task"
                    on:click=move |_| store_dispatch(&store, ViewEvent::ClickEdit)
                >
                    <span class="material-symbols-outlined">"edit_square"</span>
                </button>
                <button
                    id="delete-task-btn"
                    type="button"
                    title="Delete Task"
                    disabled=move || deleting.get()
                    on:click=on_delete
                >
                    <span class="material-symbols-outlined">"delete"</span>
                </button>
            </div>
        </div>
    }
}
