//! Task Commands
//!
//! Requests against the task server's routes.

use gloo_net::http::Request;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::models::TaskId;
use crate::storage::KeyValueStore;
use crate::toast::{PendingToast, ToastQueue};

pub const TASK_ADDED: &str = "Task Added";
pub const TASK_UPDATED: &str = "Task Updated";
pub const TASK_DELETED: &str = "Task Deleted";
pub const DELETE_FAILED: &str = "Could not delete task";

/// `GET {delete_url}{id}`; the server deletes and redirects back to the list
pub async fn delete_task(config: &AppConfig, id: &TaskId) -> AppResult<()> {
    let url = config.delete_endpoint(id);
    tracing::info!(%id, %url, "deleting task");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(AppError::Http { status: response.status() })
    }
}

/// Which native form is being submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskForm {
    Add,
    Edit,
}

/// Toast recorded right before a form posts and the page reloads
pub fn submit_toast(form: TaskForm) -> PendingToast {
    match form {
        TaskForm::Add => PendingToast::new(TASK_ADDED),
        TaskForm::Edit => PendingToast::new(TASK_UPDATED),
    }
}

/// Outcome of pressing the delete control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStart {
    /// A request for this panel is already in flight
    Busy,
    /// The user declined the prompt
    Declined,
    /// Send the request
    Send,
}

/// The prompt is only shown when no request is in flight
pub fn begin_delete(in_flight: bool, confirm: impl FnOnce() -> bool) -> DeleteStart {
    if in_flight {
        DeleteStart::Busy
    } else if confirm() {
        DeleteStart::Send
    } else {
        DeleteStart::Declined
    }
}

/// What the page does once the delete request settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterDelete {
    /// Pending toast recorded; reload to show the server's new list
    Reload,
    /// Stay on the page and show this message
    ShowError(PendingToast),
}

/// Record the post-reload toast for a successful delete, or report the failure
pub fn finish_delete<S: KeyValueStore>(
    result: AppResult<()>,
    toasts: &ToastQueue<S>,
    config: &AppConfig,
) -> AfterDelete {
    match result {
        Ok(()) => {
            let toast = PendingToast::with_undo(TASK_DELETED, config.undo_delete_url.as_str());
            if let Err(error) = toasts.enqueue(&toast) {
                tracing::warn!(%error, "failed persisting delete toast");
            }
            AfterDelete::Reload
        }
        Err(error) => {
            tracing::error!(%error, "delete request failed");
            AfterDelete::ShowError(PendingToast::new(DELETE_FAILED))
        }
    }
}
