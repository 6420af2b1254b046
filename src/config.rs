//! Frontend Configuration
//!
//! Endpoints and UI timings. Defaults match the task server's routes; a page
//! can override fields with a JSON `<script id="app-config">` block.

use serde::Deserialize;

use crate::models::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix of the edit endpoint, task id appended
    pub edit_url: String,
    /// Prefix of the delete endpoint, task id appended
    pub delete_url: String,
    pub add_url: String,
    pub undo_delete_url: String,
    pub tasks_url: String,
    pub profile_url: String,
    pub logout_url: String,
    pub toast_duration_ms: u32,
    pub delete_confirm_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            edit_url: "/edit/".to_string(),
            delete_url: "/delete/".to_string(),
            add_url: "/add".to_string(),
            undo_delete_url: "/undo_delete".to_string(),
            tasks_url: "/tasks".to_string(),
            profile_url: "/profile".to_string(),
            logout_url: "/logout".to_string(),
            toast_duration_ms: 5000,
            delete_confirm_message: "Delete this task?".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a page-supplied override; malformed input keeps the defaults
    pub fn from_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, "invalid app config, using defaults");
                Self::default()
            }
        }
    }

    pub fn edit_endpoint(&self, id: &TaskId) -> String {
        format!("{}{}", self.edit_url, encode_segment(id.as_str()))
    }

    pub fn delete_endpoint(&self, id: &TaskId) -> String {
        format!("{}{}", self.delete_url, encode_segment(id.as_str()))
    }
}

fn encode_segment(segment: &str) -> String {
    use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}
