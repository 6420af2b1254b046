//! Profile Popover Component
//!
//! Account icon that toggles a small floating box; any click outside the box
//! closes it.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::use_app_context;

/// Where a click landed relative to the popover
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopoverClick {
    Icon,
    Inside,
    Outside,
}

pub fn next_open(open: bool, click: PopoverClick) -> bool {
    match click {
        PopoverClick::Icon => !open,
        PopoverClick::Inside => open,
        PopoverClick::Outside => false,
    }
}

#[component]
pub fn ProfilePopover(email: Option<String>) -> impl IntoView {
    let config = use_app_context().config();
    let (open, set_open) = signal(false);
    let box_ref = NodeRef::<html::Div>::new();

    let on_icon = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_open.update(|o| *o = next_open(*o, PopoverClick::Icon));
    };

    commands::on_document_click(move |ev| {
        if !open.get_untracked() { return; }
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = box_ref
            .get_untracked()
            .is_some_and(|profile_box| profile_box.contains(target.as_ref()));
        let click = if inside { PopoverClick::Inside } else { PopoverClick::Outside };
        set_open.set(next_open(true, click));
    });

    view! {
        <div class="profile">
            <a id="account-icon" href="#" title="Account" on:click=on_icon>
                <span class="material-symbols-outlined">"account_circle"</span>
            </a>
            <div
                id="profile-box"
                class=move || if open.get() { "profile-box" } else { "profile-box hidden" }
                node_ref=box_ref
            >
                {email.map(|email| view! { <p class="profile-email">{email}</p> })}
                <a href=config.profile_url>"Profile"</a>
                <a href=config.logout_url>"Log out"</a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_toggles() {
        assert!(next_open(false, PopoverClick::Icon));
        assert!(!next_open(true, PopoverClick::Icon));
    }

    #[test]
    fn test_inside_keeps_and_outside_closes() {
        assert!(next_open(true, PopoverClick::Inside));
        assert!(!next_open(true, PopoverClick::Outside));
        assert!(!next_open(false, PopoverClick::Outside));
    }
}
