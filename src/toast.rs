//! Pending Toast Queue
//!
//! A single toast slot persisted across a full page reload. Writers enqueue
//! right before navigating away; the next page load drains it once.

use crate::error::AppResult;
use crate::storage::KeyValueStore;

pub const TOAST_MESSAGE_KEY: &str = "toastMessage";
pub const UNDO_URL_KEY: &str = "undoUrl";

/// Undo target meaning "no undo available"
const UNDO_PLACEHOLDER: &str = "#";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToast {
    pub message: String,
    pub undo_url: Option<String>,
}

impl PendingToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), undo_url: None }
    }

    pub fn with_undo(message: impl Into<String>, undo_url: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            undo_url: normalize_undo(undo_url.into()),
        }
    }
}

fn normalize_undo(url: String) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed == UNDO_PLACEHOLDER {
        None
    } else {
        Some(url)
    }
}

/// At-most-once delivery of one toast across a reload
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastQueue<S> {
    storage: S,
}

impl<S: KeyValueStore> ToastQueue<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Replace the pending slot; a toast without undo clears any stale undo URL
    pub fn enqueue(&self, toast: &PendingToast) -> AppResult<()> {
        self.storage.set_item(TOAST_MESSAGE_KEY, &toast.message)?;
        match &toast.undo_url {
            Some(url) => self.storage.set_item(UNDO_URL_KEY, url),
            None => self.storage.remove_item(UNDO_URL_KEY),
        }
    }

    /// Take the pending toast, clearing the slot
    pub fn drain_once(&self) -> Option<PendingToast> {
        let message = self.storage.get_item(TOAST_MESSAGE_KEY).filter(|m| !m.is_empty());
        let undo_url = self.storage.get_item(UNDO_URL_KEY).and_then(normalize_undo);

        let message = message?;
        for key in [TOAST_MESSAGE_KEY, UNDO_URL_KEY] {
            if let Err(error) = self.storage.remove_item(key) {
                tracing::warn!(%error, key, "failed clearing pending toast");
            }
        }
        Some(PendingToast { message, undo_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_drain_empty_slot() {
        let queue = ToastQueue::new(MemoryStorage::default());
        assert_eq!(queue.drain_once(), None);
    }

    #[test]
    fn test_enqueue_then_drain_once() {
        let storage = MemoryStorage::default();
        let queue = ToastQueue::new(&storage);

        queue.enqueue(&PendingToast::with_undo("Task Deleted", "/undo_delete")).unwrap();
        assert_eq!(storage.get_item(TOAST_MESSAGE_KEY).as_deref(), Some("Task Deleted"));
        assert_eq!(storage.get_item(UNDO_URL_KEY).as_deref(), Some("/undo_delete"));

        let toast = queue.drain_once().unwrap();
        assert_eq!(toast.message, "Task Deleted");
        assert_eq!(toast.undo_url.as_deref(), Some("/undo_delete"));

        assert!(!storage.contains(TOAST_MESSAGE_KEY));
        assert!(!storage.contains(UNDO_URL_KEY));
        assert_eq!(queue.drain_once(), None);
    }

    #[test]
    fn test_enqueue_without_undo_clears_stale_url() {
        let storage = MemoryStorage::with(&[(UNDO_URL_KEY, "/undo_delete")]);
        let queue = ToastQueue::new(&storage);

        queue.enqueue(&PendingToast::new("Task Updated")).unwrap();

        assert!(!storage.contains(UNDO_URL_KEY));
        assert_eq!(queue.drain_once(), Some(PendingToast::new("Task Updated")));
    }

    #[test]
    fn test_placeholder_undo_is_dropped() {
        let storage = MemoryStorage::with(&[(TOAST_MESSAGE_KEY, "Saved"), (UNDO_URL_KEY, "#")]);
        let queue = ToastQueue::new(&storage);

        let toast = queue.drain_once().unwrap();
        assert_eq!(toast.undo_url, None);
        assert_eq!(PendingToast::with_undo("x", "#").undo_url, None);
    }

    #[test]
    fn test_orphan_undo_url_is_not_delivered() {
        let storage = MemoryStorage::with(&[(UNDO_URL_KEY, "/undo_delete")]);
        let queue = ToastQueue::new(&storage);
        assert_eq!(queue.drain_once(), None);
    }
}
