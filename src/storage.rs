//! Key/Value Storage
//!
//! Persistence seam for state kept outside the server: the completion overlay
//! and the pending toast slot. The browser backend wraps `window.localStorage`;
//! tests use an in-memory map.

use crate::error::{AppError, AppResult};

/// String key/value persistence, shaped after the Web Storage API
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        (**self).remove_item(key)
    }
}

/// Browser `localStorage`, looked up on every access
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> AppResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(AppError::StorageUnavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| AppError::StorageWrite { key: key.to_string() })
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| AppError::StorageWrite { key: key.to_string() })
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;
