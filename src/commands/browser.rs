//! Browser Commands
//!
//! Blocking prompts, navigation and document-level listeners.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|window| window.location())
}

/// Blocking yes/no prompt; `false` when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn reload() {
    if let Some(location) = location() {
        if let Err(err) = location.reload() {
            tracing::error!(?err, "page reload failed");
        }
    }
}

pub fn navigate(url: &str) {
    if let Some(location) = location() {
        if let Err(err) = location.set_href(url) {
            tracing::error!(?err, url, "navigation failed");
        }
    }
}

/// Current `location.search`, including the leading `?` when present
pub fn current_query() -> String {
    location()
        .and_then(|location| location.search().ok())
        .unwrap_or_default()
}

/// Bind a click handler on the document for the lifetime of the page
pub fn on_document_click<F>(handler: F)
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
    on_click.forget();
}
