//! Toast Component
//!
//! One-line notification with an optional undo link. Shows the toast left
//! by the previous page on mount and hides itself after a fixed delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_app_context();

    if let Some(pending) = ctx.toasts.drain_once() {
        ctx.show_toast(pending);
    }

    // Auto-hide; a newer toast is never hidden by an older timer
    Effect::new(move |_| {
        if let Some(shown) = ctx.active_toast.get() {
            let seq = shown.seq;
            Timeout::new(ctx.config().toast_duration_ms, move || ctx.hide_toast(seq)).forget();
        }
    });

    let message = move || {
        ctx.active_toast
            .with(|shown| shown.as_ref().map(|s| s.message.clone()))
            .unwrap_or_default()
    };
    let has_undo = move || {
        ctx.active_toast
            .with(|shown| shown.as_ref().is_some_and(|s| s.undo_url.is_some()))
    };

    let on_undo = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let Some(shown) = ctx.active_toast.get_untracked() else { return };
        ctx.hide_toast(shown.seq);
        if let Some(url) = shown.undo_url {
            tracing::info!(%url, "undo requested");
            commands::navigate(&url);
        }
    };

    view! {
        <div
            id="toast"
            class=move || if ctx.active_toast.with(Option::is_some) { "toast show" } else { "toast hidden" }
        >
            <span id="toast-message">{message}</span>
            <button
                id="undo-btn"
                type="button"
                style:display=move || if has_undo() { "inline-block" } else { "none" }
                on:click=on_undo
            >
                "Undo"
            </button>
        </div>
    }
}
