//! Page Anchors
//!
//! Reads what the server rendered into the page: the mount point, the task
//! list with its `data-*` records, and an optional config block.

use wasm_bindgen::JsCast;

use crate::config::AppConfig;
use crate::models::Task;

const MOUNT_ID: &str = "app";
const TASK_BOX_ID: &str = "task-box";
const CONFIG_ID: &str = "app-config";

/// Elements the app cannot run without
pub struct PageAnchors {
    pub document: web_sys::Document,
    pub mount: web_sys::HtmlElement,
    pub task_box: web_sys::Element,
}

impl PageAnchors {
    /// `None` when any anchor is missing
    pub fn locate() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let mount = document
            .get_element_by_id(MOUNT_ID)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        let task_box = document.get_element_by_id(TASK_BOX_ID)?;
        Some(Self { document, mount, task_box })
    }

    /// Parse every `.task` element under the server list
    pub fn read_tasks(&self) -> Vec<Task> {
        let Ok(nodes) = self.task_box.query_selector_all(".task") else {
            return Vec::new();
        };
        let mut tasks = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            match Task::from_attributes(|name| element.get_attribute(name)) {
                Some(task) => tasks.push(task),
                None => tracing::warn!(index, "task element without data-id, skipping"),
            }
        }
        tasks
    }

    /// The server list is replaced by the mounted app
    pub fn remove_server_list(&self) {
        self.task_box.remove();
    }

    pub fn read_config(&self) -> AppConfig {
        let raw = self
            .document
            .get_element_by_id(CONFIG_ID)
            .and_then(|element| element.text_content());
        AppConfig::from_json(raw.as_deref())
    }

    /// Signed-in account shown in the profile popover
    pub fn account_email(&self) -> Option<String> {
        self.mount.get_attribute("data-email").filter(|email| !email.is_empty())
    }
}
