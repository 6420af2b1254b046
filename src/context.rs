//! Application Context
//!
//! Services shared via Leptos Context API.

use leptos::prelude::*;

use crate::completion::CompletionStore;
use crate::config::AppConfig;
use crate::storage::LocalStorage;
use crate::toast::{PendingToast, ToastQueue};

/// A toast currently on screen; `seq` tells successive toasts apart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShownToast {
    pub seq: u32,
    pub message: String,
    pub undo_url: Option<String>,
}

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    next_toast_seq: StoredValue<u32>,
    /// Completion overlay persisted in local storage
    pub completion: CompletionStore<LocalStorage>,
    /// Toast slot that survives a reload
    pub toasts: ToastQueue<LocalStorage>,
    /// Toast on screen - read
    pub active_toast: ReadSignal<Option<ShownToast>>,
    /// Toast on screen - write
    set_active_toast: WriteSignal<Option<ShownToast>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (active_toast, set_active_toast) = signal(None);
        Self {
            config: StoredValue::new(config),
            next_toast_seq: StoredValue::new(0),
            completion: CompletionStore::new(LocalStorage),
            toasts: ToastQueue::new(LocalStorage),
            active_toast,
            set_active_toast,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Display a toast now, replacing whatever is showing
    pub fn show_toast(&self, toast: PendingToast) {
        let seq = self.next_toast_seq.get_value();
        self.next_toast_seq.set_value(seq.wrapping_add(1));
        tracing::info!(text = %toast.message, seq, "showing toast");
        self.set_active_toast.set(Some(ShownToast {
            seq,
            message: toast.message,
            undo_url: toast.undo_url,
        }));
    }

    /// Hide the toast, but only if it is still the one identified by `seq`
    pub fn hide_toast(&self, seq: u32) {
        if self.active_toast.get_untracked().is_some_and(|shown| shown.seq == seq) {
            self.set_active_toast.set(None);
        }
    }

    /// Persist a toast for the next page load
    pub fn enqueue_toast(&self, toast: PendingToast) {
        if let Err(error) = self.toasts.enqueue(&toast) {
            tracing::warn!(%error, text = %toast.message, "failed persisting pending toast");
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
