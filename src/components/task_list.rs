//! Task List Component
//!
//! The task rows with their completion checkboxes.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::format::format_deadline;
use crate::models::Task;
use crate::store::{store_dispatch, store_set_completed, use_app_store, AppStateStoreFields};
use crate::view_state::{Layout, ViewEvent};

/// All tasks in server order
#[component]
pub fn TaskList(layout: Memo<Layout>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul id="task-list" class="task-list">
            <For
                each=move || store.tasks().get()
                key=|task| task.id.clone()
                children=move |task| view! { <TaskRow task=task layout=layout /> }
            />
        </ul>
        <Show when=move || store.tasks().read().is_empty()>
            <p class="task-list-empty">"No tasks yet."</p>
        </Show>
    }
}

/// A single task row
#[component]
fn TaskRow(task: Task, layout: Memo<Layout>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let is_completed = {
        let id = task.id.clone();
        move || store.completed().read().contains(&id)
    };

    let row_class = {
        let id = task.id.clone();
        let tint = task.tint_class();
        let is_completed = is_completed.clone();
        move || {
            let mut c = String::from("task");
            if let Some(tint) = tint {
                c.push(' ');
                c.push_str(tint);
            }
            if is_completed() { c.push_str(" completed"); }
            if layout.with(|l| l.selected.as_ref() == Some(&id)) { c.push_str(" selected"); }
            c
        }
    };

    let on_select = {
        let id = task.id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            store_dispatch(&store, ViewEvent::SelectTask(id.clone()));
        }
    };

    let on_toggle = {
        let id = task.id.clone();
        move |ev: web_sys::Event| {
            let checked = event_target_checked(&ev);
            store_set_completed(&store, &id, checked);
            if let Err(error) = ctx.completion.set_completed(&id, checked) {
                tracing::warn!(%error, %id, "failed persisting completion state");
            }
        }
    };

    let deadline = format_deadline(task.date.as_deref(), task.time.as_deref());

    view! {
        <li class=row_class data-id=task.id.to_string() on:click=on_select>
            <input
                type="checkbox"
                class="task-check"
                prop:checked=is_completed
                on:change=on_toggle
            />
            <span class="task-name">{task.name.clone()}</span>
            <span class="task-label">{task.label.clone()}</span>
            {deadline.map(|text| view! { <span class="task-deadline">{text}</span> })}
        </li>
    }
}
