//! Task View Box
//!
//! Right-hand panel; shows the one panel the current layout selects.

use leptos::prelude::*;

use crate::components::{AddTaskForm, EditTaskForm, TaskDetails};
use crate::store::{store_find_task, use_app_store};
use crate::view_state::{Layout, Panel};

#[component]
pub fn TaskViewBox(layout: Memo<Layout>) -> impl IntoView {
    let store = use_app_store();

    let box_class = move || {
        layout.with(|l| {
            let mut c = String::from("task-view-box");
            if l.dimmed { c.push_str(" dim"); }
            if let Some(tint) = l.tint {
                c.push(' ');
                c.push_str(tint);
            }
            c
        })
    };

    let panel = move || {
        let (panel, selected) = layout.with(|l| (l.panel, l.selected.clone()));
        let task = selected.and_then(|id| store_find_task(&store, &id));
        match (panel, task) {
            (Panel::AddForm, _) => view! { <AddTaskForm /> }.into_any(),
            (Panel::Details, Some(task)) => view! { <TaskDetails task=task /> }.into_any(),
            (Panel::Edit, Some(task)) => view! { <EditTaskForm task=task /> }.into_any(),
            _ => view! { <EmptyView /> }.into_any(),
        }
    };

    view! {
        // Clicks inside the panel never count as "outside"
        <section
            id="task-view-box"
            class=box_class
            on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
        >
            {panel}
        </section>
    }
}

#[component]
fn EmptyView() -> impl IntoView {
    view! {
        <div id="empty-view" class="empty-view">
            <p>"Select a task to see its details, or add a new one."</p>
        </div>
    }
}
