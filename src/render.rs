//! Task Detail Rendering
//!
//! Read-only markup for the details panel and the pre-filled values of the
//! edit form. Every task field is user input and is escaped before it is
//! placed into markup.

use crate::format::{format_created_datetime, format_date, format_time};
use crate::models::Task;

/// Escape text for insertion into HTML content or quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Markup for the read-only details panel (controls are rendered separately)
pub fn render_details_html(task: &Task) -> String {
    let priority = task.priority.as_ref().map(|p| p.label()).unwrap_or_default();
    let date = format_date(task.date.as_deref().unwrap_or_default());
    let time = format_time(task.time.as_deref().unwrap_or_default());

    format!(
        r#"<div id="header">
  <span class="prio">Priority Level: <strong>{priority}</strong></span>
  <span>Label: <strong>{label}</strong></span>
</div>
<h2 class="task-todo">{name}</h2>
<hr>
<div id="details">
  <span><strong>Deadline: </strong>{date} | {time}</span>
  <br><br>
  <span><strong>Description:</strong><br>{desc}</span>
  <br><br><br>
  <span><strong>Sub-tasks:</strong> {sub}</span>
  <br><br>
</div>
<div id="footer">
  <span><em>Created on: {created}</em></span>
</div>"#,
        priority = escape_html(priority),
        label = escape_html(&task.label),
        name = escape_html(&task.name),
        date = escape_html(&date),
        time = escape_html(&time),
        desc = escape_html(task.description.as_deref().unwrap_or_default()),
        sub = escape_html(task.subtasks.as_deref().unwrap_or_default()),
        created = escape_html(&format_created_datetime(&task.created_at)),
    )
}

/// Initial values of the edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    /// Priority radio to pre-check (`"1"`, `"2"`, `"3"`), if any matches
    pub priority: Option<String>,
    pub label: String,
    pub task_name: String,
    pub date: String,
    pub time: String,
    pub task_desc: String,
    pub sub_todo: String,
    /// Sub-task switch state; also controls the sub-task input visibility
    pub show_subtasks: bool,
}

impl EditDraft {
    pub fn from_task(task: &Task) -> Self {
        let sub_todo = task.subtasks.clone().unwrap_or_default();
        Self {
            priority: task
                .priority
                .as_ref()
                .filter(|p| p.tint_class().is_some())
                .map(|p| p.value().to_string()),
            label: task.label.clone(),
            task_name: task.name.clone(),
            date: task.date.clone().unwrap_or_default(),
            time: task.time.clone().unwrap_or_default(),
            task_desc: task.description.clone().unwrap_or_default(),
            show_subtasks: !sub_todo.is_empty(),
            sub_todo,
        }
    }

    pub fn is_priority_checked(&self, value: &str) -> bool {
        self.priority.as_deref() == Some(value)
    }
}
