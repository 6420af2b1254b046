//! Completion Store
//!
//! Per-task completion overlay kept in local storage, independent of the
//! server's task records. The stored value is a JSON object keyed by task id;
//! a key with a truthy value means completed, absence means not completed.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::models::{Task, TaskId};
use crate::storage::KeyValueStore;

pub const COMPLETED_TASKS_KEY: &str = "completedTasks";

/// Parsed contents of the `completedTasks` key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionState(Map<String, Value>);

impl CompletionState {
    pub fn is_completed(&self, id: &TaskId) -> bool {
        self.0.get(id.as_str()).is_some_and(is_truthy)
    }

    pub fn mark(&mut self, id: &TaskId) {
        self.0.insert(id.to_string(), Value::Bool(true));
    }

    pub fn unmark(&mut self, id: &TaskId) {
        self.0.remove(id.as_str());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Completion overlay backed by a key/value store
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> CompletionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted mapping; missing or malformed data yields an empty one
    pub fn load(&self) -> CompletionState {
        let Some(raw) = self.storage.get_item(COMPLETED_TASKS_KEY) else {
            return CompletionState::default();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => CompletionState(map),
            Ok(other) => {
                tracing::warn!(kind = ?other, "completion state is not a JSON object, ignoring");
                CompletionState::default()
            }
            Err(error) => {
                tracing::warn!(%error, "failed parsing completion state from local storage");
                CompletionState::default()
            }
        }
    }

    pub fn save(&self, state: &CompletionState) -> AppResult<()> {
        let json = serde_json::to_string(&state.0)
            .map_err(|source| AppError::Serialize { what: "completion state", source })?;
        self.storage.set_item(COMPLETED_TASKS_KEY, &json)
    }

    /// Ids of the rendered tasks that should show as completed
    pub fn restore(&self, tasks: &[Task]) -> BTreeSet<TaskId> {
        let state = self.load();
        tasks
            .iter()
            .filter(|task| state.is_completed(&task.id))
            .map(|task| task.id.clone())
            .collect()
    }

    /// Checkbox handler: checking stores `true`, unchecking drops the key
    pub fn set_completed(&self, id: &TaskId, completed: bool) -> AppResult<()> {
        let mut state = self.load();
        if completed {
            state.mark(id);
        } else {
            state.unmark(id);
        }
        self.save(&state)
    }
}
