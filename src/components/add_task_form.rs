//! Add Task Form Component
//!
//! Posts natively to the server's add route; the reload that follows shows
//! the new task.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::commands::{submit_toast, TaskForm};
use crate::components::TaskFormFields;
use crate::context::use_app_context;
use crate::render::EditDraft;

/// Server default when no priority is submitted
const DEFAULT_PRIORITY: &str = "3";

#[component]
pub fn AddTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let form_ref = NodeRef::<html::Form>::new();

    // Focus the first field once the form is mounted
    Effect::new(move |_| {
        if let Some(form) = form_ref.get() {
            focus_first_field(&form);
        }
    });

    let on_submit = move |_: web_sys::SubmitEvent| {
        ctx.enqueue_toast(submit_toast(TaskForm::Add));
    };

    let draft = EditDraft {
        priority: Some(DEFAULT_PRIORITY.to_string()),
        ..EditDraft::default()
    };

    view! {
        <form
            id="task-form"
            class="task-details-box"
            method="POST"
            action=ctx.config().add_url
            node_ref=form_ref
            on:submit=on_submit
        >
            <h2 class="add-task">"New Task"</h2>
            <TaskFormFields draft=draft />
            <div id="save-cancel-btns">
                <button type="submit" id="save-task">"ADD TASK"</button>
            </div>
        </form>
    }
}

fn focus_first_field(form: &web_sys::HtmlFormElement) {
    let first = form
        .query_selector("input, textarea, select")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(element) = first {
        let _ = element.focus();
    }
}
