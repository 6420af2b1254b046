//! Edit Task Form Component
//!
//! Replaces the details panel with a form pre-filled from the selected task.
//! Submission is a native POST; the pending toast is recorded first so the
//! reloaded page can announce the update.

use leptos::prelude::*;

use crate::commands::{submit_toast, TaskForm};
use crate::components::TaskFormFields;
use crate::context::use_app_context;
use crate::models::Task;
use crate::render::EditDraft;
use crate::store::{store_dispatch, use_app_store};
use crate::view_state::ViewEvent;

#[component]
pub fn EditTaskForm(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let action = ctx.config().edit_endpoint(&task.id);
    let draft = EditDraft::from_task(&task);

    let on_submit = move |_: web_sys::SubmitEvent| {
        ctx.enqueue_toast(submit_toast(TaskForm::Edit));
    };

    view! {
        <div id="task-details">
            <form method="POST" action=action class="task-details-box" on:submit=on_submit>
                <h2 class="edit-task">"Edit Task"</h2>
                <TaskFormFields draft=draft />
                <div id="save-cancel-btns">
                    <button
                        type="button"
                        id="cancel-edit"
                        title="Cancel Edit"
                        on:click=move |_| store_dispatch(&store, ViewEvent::CancelEdit)
                    >
                        <span class="material-symbols-outlined">"close"</span>
                    </button>
                    <button type="submit" id="save-changes">"SAVE CHANGES"</button>
                </div>
            </form>
        </div>
    }
}
