//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};
use crate::view_state::{ViewEvent, ViewState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks parsed from the server-rendered list, in server order
    pub tasks: Vec<Task>,
    /// Ids currently shown as completed
    pub completed: BTreeSet<TaskId>,
    /// Which right-hand panel is showing
    pub view: ViewState,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, completed: BTreeSet<TaskId>) -> Self {
        Self {
            tasks,
            completed,
            view: ViewState::Empty,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run one view transition against the current task list
pub fn store_dispatch(store: &AppStore, event: ViewEvent) {
    let current = store.view().get_untracked();
    let next = {
        let tasks = store.tasks().read_untracked();
        current.transition(event, |id| tasks.iter().any(|task| &task.id == id))
    };
    if next != current {
        tracing::debug!(from = ?current, to = ?next, "view transition");
        store.view().set(next);
    }
}

/// Update the completed overlay for one task
pub fn store_set_completed(store: &AppStore, id: &TaskId, completed: bool) {
    store.completed().update(|ids| {
        if completed {
            ids.insert(id.clone());
        } else {
            ids.remove(id);
        }
    });
}

/// Look up a task by id
pub fn store_find_task(store: &AppStore, id: &TaskId) -> Option<Task> {
    store.tasks().read_untracked().iter().find(|task| &task.id == id).cloned()
}
