//! Sort Bar Component
//!
//! Links choosing the server-side ordering of the task list.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Default,
    Priority,
    Due,
    Timestamp,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [Self::Default, Self::Priority, Self::Due, Self::Timestamp];

    /// Read `sort` from a query string such as `?sort=due&x=1`
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("sort="))
            .map(Self::from_param)
            .unwrap_or(Self::Default)
    }

    fn from_param(param: &str) -> Self {
        match param {
            "priority" => Self::Priority,
            "due" => Self::Due,
            "timestamp" => Self::Timestamp,
            _ => Self::Default,
        }
    }

    pub fn param(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Priority => Some("priority"),
            Self::Due => Some("due"),
            Self::Timestamp => Some("timestamp"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Priority => "Priority",
            Self::Due => "Due date",
            Self::Timestamp => "Newest",
        }
    }

    pub fn href(self, tasks_url: &str) -> String {
        match self.param() {
            Some(param) => format!("{}?sort={}", tasks_url, param),
            None => tasks_url.to_string(),
        }
    }
}

#[component]
pub fn SortBar() -> impl IntoView {
    let tasks_url = use_app_context().config().tasks_url;
    let current = SortOrder::from_query(&commands::current_query());

    view! {
        <nav class="sort-bar">
            <span class="sort-label">"Sort by:"</span>
            {SortOrder::ALL
                .into_iter()
                .map(|order| {
                    let class = if order == current { "sort-link active" } else { "sort-link" };
                    view! { <a class=class href=order.href(&tasks_url)>{order.label()}</a> }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query() {
        assert_eq!(SortOrder::from_query(""), SortOrder::Default);
        assert_eq!(SortOrder::from_query("?sort=due"), SortOrder::Due);
        assert_eq!(SortOrder::from_query("?page=2&sort=priority"), SortOrder::Priority);
        assert_eq!(SortOrder::from_query("?sort=None"), SortOrder::Default);
        assert_eq!(SortOrder::from_query("?sort=bogus"), SortOrder::Default);
    }

    #[test]
    fn test_href_roundtrip() {
        for order in SortOrder::ALL {
            let href = order.href("/tasks");
            let query = href.strip_prefix("/tasks").unwrap();
            assert_eq!(SortOrder::from_query(query), order);
        }
    }
}
