//! Frontend Models
//!
//! Task records parsed from the server-rendered list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier, stable across reloads
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task priority as rendered by the server (`1`, `2`, `3`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
    /// Any other value the server emitted, kept verbatim
    Other(String),
}

impl Priority {
    /// Parse a raw attribute value; empty means no priority
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "" => None,
            "1" => Some(Self::High),
            "2" => Some(Self::Medium),
            "3" => Some(Self::Low),
            other => Some(Self::Other(other.to_string())),
        }
    }

    /// Display label, falling back to the raw value
    pub fn label(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Other(raw) => raw,
        }
    }

    /// Form value submitted for this priority
    pub fn value(&self) -> &str {
        match self {
            Self::High => "1",
            Self::Medium => "2",
            Self::Low => "3",
            Self::Other(raw) => raw,
        }
    }

    /// Background tint class; unmapped priorities get none
    pub fn tint_class(&self) -> Option<&'static str> {
        match self {
            Self::High => Some("high"),
            Self::Medium => Some("medium"),
            Self::Low => Some("low"),
            Self::Other(_) => None,
        }
    }
}

/// Radio options offered by the add and edit forms
pub const PRIORITY_OPTIONS: &[(&str, &str)] = &[
    ("1", "High Priority"),
    ("2", "Medium Priority"),
    ("3", "Low Priority"),
];

/// Task data structure (matches the server's `data-*` attributes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub priority: Option<Priority>,
    pub label: String,
    pub name: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
    pub subtasks: Option<String>,
    pub created_at: String,
}

impl Task {
    /// Build a task from an attribute lookup such as `Element::get_attribute`.
    ///
    /// Returns `None` when the element carries no usable `data-id`.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let text = |name: &str| attr(name).unwrap_or_default();
        let optional = |name: &str| attr(name).filter(|value| !value.is_empty());

        let id = optional("data-id")?;
        let priority = optional("data-priority")
            .or_else(|| optional("data-prio"))
            .and_then(|raw| Priority::parse(&raw));

        Some(Self {
            id: TaskId::new(id),
            priority,
            label: text("data-label"),
            name: text("data-task"),
            date: optional("data-date"),
            time: optional("data-time"),
            description: optional("data-desc"),
            subtasks: optional("data-sub"),
            created_at: text("data-created"),
        })
    }

    pub fn tint_class(&self) -> Option<&'static str> {
        self.priority.as_ref().and_then(Priority::tint_class)
    }
}

#[cfg(test)]
pub(crate) fn make_task(id: &str, priority: &str) -> Task {
    Task {
        id: TaskId::new(id),
        priority: Priority::parse(priority),
        label: "Work".to_string(),
        name: format!("Task {}", id),
        date: Some("2025-01-05".to_string()),
        time: Some("13:30".to_string()),
        description: Some("Write the report".to_string()),
        subtasks: None,
        created_at: "2025-01-01 09:05:00".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_attributes_full() {
        let task = Task::from_attributes(lookup(&[
            ("data-id", "7"),
            ("data-priority", "2"),
            ("data-label", "Home"),
            ("data-task", "Laundry"),
            ("data-date", "2025-03-01"),
            ("data-time", ""),
            ("data-desc", "Whites only"),
            ("data-sub", "sort; wash"),
            ("data-created", "2025-02-28 18:00:00"),
        ]))
        .unwrap();

        assert_eq!(task.id.as_str(), "7");
        assert_eq!(task.priority, Some(Priority::Medium));
        assert_eq!(task.name, "Laundry");
        assert_eq!(task.date.as_deref(), Some("2025-03-01"));
        assert_eq!(task.time, None);
        assert_eq!(task.subtasks.as_deref(), Some("sort; wash"));
    }

    #[test]
    fn test_legacy_prio_attribute() {
        let task = Task::from_attributes(lookup(&[("data-id", "1"), ("data-prio", "3")])).unwrap();
        assert_eq!(task.priority, Some(Priority::Low));
        assert_eq!(task.label, "");
    }

    #[test]
    fn test_priority_attribute_wins_over_legacy() {
        let task = Task::from_attributes(lookup(&[
            ("data-id", "1"),
            ("data-priority", "1"),
            ("data-prio", "3"),
        ]))
        .unwrap();
        assert_eq!(task.priority, Some(Priority::High));
    }

    #[test]
    fn test_missing_id_is_skipped() {
        assert!(Task::from_attributes(lookup(&[("data-task", "orphan")])).is_none());
        assert!(Task::from_attributes(lookup(&[("data-id", "")])).is_none());
    }

    #[test]
    fn test_priority_mapping() {
        assert_eq!(Priority::parse("  "), None);
        assert_eq!(Priority::parse("9"), Some(Priority::Other("9".to_string())));
        assert_eq!(Priority::parse("9").unwrap().label(), "9");
        assert_eq!(Priority::parse("9").unwrap().tint_class(), None);
        assert_eq!(Priority::High.tint_class(), Some("high"));
        assert_eq!(Priority::Low.value(), "3");
    }
}
