//! Frontend Errors
//!
//! Failures surfaced by browser storage and backend requests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("local storage unavailable")]
    StorageUnavailable,

    #[error("local storage write failed for key {key}")]
    StorageWrite { key: String },

    #[error("server responded with status {status}")]
    Http { status: u16 },

    #[error("network request failed: {0}")]
    Network(String),

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type AppResult<T> = Result<T, AppError>;
