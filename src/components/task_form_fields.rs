//! Task Form Fields
//!
//! Inputs shared by the add and edit forms. Field names are the ones the
//! server's `/add` and `/edit/{id}` routes read.

use leptos::prelude::*;

use crate::models::PRIORITY_OPTIONS;
use crate::render::EditDraft;

#[component]
pub fn TaskFormFields(draft: EditDraft) -> impl IntoView {
    let (show_sub, set_show_sub) = signal(draft.show_subtasks);

    let radios = PRIORITY_OPTIONS
        .iter()
        .map(|(value, label)| {
            let checked = draft.is_priority_checked(value);
            view! {
                <label>
                    <input type="radio" name="priority" value=*value checked=checked />
                    " " {*label}
                </label>
            }
        })
        .collect_view();

    let EditDraft { label, task_name, date, time, task_desc, sub_todo, .. } = draft;

    view! {
        <div id="task-header">
            <div id="prio-select">
                <label><strong>"Priority Level:"</strong></label>
                {radios}
            </div>

            <div id="label">
                <label><strong>"Label"</strong></label>
                <br />
                <input type="text" name="label" value=label required=true />
            </div>

            <div id="to-do-title">
                <label><strong>"Task Name"</strong></label>
                <br />
                <input type="text" name="task_name" value=task_name required=true />
            </div>

            <span class="dl-label"><strong>"Deadline"</strong></span>
            <div id="deadline">
                <label>"Date:"</label>
                <input type="date" name="date" value=date />
                <label>"Time:"</label>
                <input type="time" name="time" value=time />
            </div>
        </div>

        <div id="desc-label">
            <label><strong>"Description"</strong></label>
            <br />
            <textarea name="task_desc" prop:value=task_desc></textarea>
        </div>

        <label class="switch-label">
            <strong>" Add sub to-do(s) "</strong>
            <label class="switch" title="Toggle sub to-dos">
                <input
                    type="checkbox"
                    id="toggle-sub"
                    prop:checked=move || show_sub.get()
                    on:change=move |ev| set_show_sub.set(event_target_checked(&ev))
                />
                <span class="slider"></span>
            </label>
        </label>

        <div
            id="sub-task-box"
            class="sub-box"
            style:display=move || if show_sub.get() { "block" } else { "none" }
            aria-hidden=move || if show_sub.get() { "false" } else { "true" }
        >
            <label>"Sub-Tasks:"</label>
            <input type="text" name="sub_todo" value=sub_todo />
        </div>
    }
}
