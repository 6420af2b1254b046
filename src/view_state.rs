//! View State Machine
//!
//! The right-hand panel shows exactly one of: the empty placeholder, the add
//! form, the selected task's details, or the edit form for that task.
//! `ViewState::transition` is the only way the state changes, and
//! `ViewState::layout` derives everything the view needs from it.

use crate::models::{Task, TaskId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Empty,
    AddForm,
    TaskDetails(TaskId),
    EditForm(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The "add task" button
    ClickAdd,
    /// A row in the task list
    SelectTask(TaskId),
    /// Edit control in the details panel
    ClickEdit,
    /// Cancel control in the edit form
    CancelEdit,
    /// A click that reached the document
    ClickOutside,
}

/// The single visible panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Empty,
    AddForm,
    Details,
    Edit,
}

/// Render inputs derived from a `ViewState`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub panel: Panel,
    /// Background dimmed while the add form is open
    pub dimmed: bool,
    /// Highlighted row in the list
    pub selected: Option<TaskId>,
    /// Priority tint class on the panel container
    pub tint: Option<&'static str>,
}

impl ViewState {
    pub fn transition(&self, event: ViewEvent, is_present: impl Fn(&TaskId) -> bool) -> ViewState {
        match (self, event) {
            (ViewState::AddForm, ViewEvent::ClickAdd) => ViewState::Empty,
            (_, ViewEvent::ClickAdd) => ViewState::AddForm,

            (_, ViewEvent::SelectTask(id)) if is_present(&id) => ViewState::TaskDetails(id),
            (_, ViewEvent::SelectTask(_)) => ViewState::Empty,

            (ViewState::TaskDetails(id), ViewEvent::ClickEdit) if is_present(id) => {
                ViewState::EditForm(id.clone())
            }
            (ViewState::TaskDetails(_), ViewEvent::ClickEdit) => ViewState::Empty,
            (state, ViewEvent::ClickEdit) => state.clone(),

            (ViewState::EditForm(id), ViewEvent::CancelEdit) if is_present(id) => {
                ViewState::TaskDetails(id.clone())
            }
            (ViewState::EditForm(_), ViewEvent::CancelEdit) => ViewState::Empty,
            (state, ViewEvent::CancelEdit) => state.clone(),

            (_, ViewEvent::ClickOutside) => ViewState::Empty,
        }
    }

    pub fn selected_id(&self) -> Option<&TaskId> {
        match self {
            ViewState::TaskDetails(id) | ViewState::EditForm(id) => Some(id),
            ViewState::Empty | ViewState::AddForm => None,
        }
    }

    pub fn layout(&self, tasks: &[Task]) -> Layout {
        let selected = self
            .selected_id()
            .and_then(|id| tasks.iter().find(|task| &task.id == id));

        let panel = match (self, selected) {
            (ViewState::AddForm, _) => Panel::AddForm,
            (ViewState::TaskDetails(_), Some(_)) => Panel::Details,
            (ViewState::EditForm(_), Some(_)) => Panel::Edit,
            _ => Panel::Empty,
        };

        Layout {
            panel,
            dimmed: panel == Panel::AddForm,
            selected: selected.map(|task| task.id.clone()),
            tint: selected.and_then(Task::tint_class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_task;

    fn tasks() -> Vec<Task> {
        vec![make_task("1", "1"), make_task("2", "2"), make_task("3", "3"), make_task("4", "7")]
    }

    fn step(state: &ViewState, event: ViewEvent, tasks: &[Task]) -> ViewState {
        state.transition(event, |id| tasks.iter().any(|task| &task.id == id))
    }

    fn id(raw: &str) -> TaskId {
        TaskId::new(raw)
    }

    #[test]
    fn test_click_add_toggles_between_form_and_empty() {
        let tasks = tasks();
        let state = step(&ViewState::Empty, ViewEvent::ClickAdd, &tasks);
        assert_eq!(state, ViewState::AddForm);
        assert_eq!(step(&state, ViewEvent::ClickAdd, &tasks), ViewState::Empty);
    }

    #[test]
    fn test_closing_add_form_never_restores_details() {
        let tasks = tasks();
        let details = ViewState::TaskDetails(id("1"));
        let form = step(&details, ViewEvent::ClickAdd, &tasks);
        assert_eq!(form, ViewState::AddForm);
        assert_eq!(step(&form, ViewEvent::ClickAdd, &tasks), ViewState::Empty);
    }

    #[test]
    fn test_select_replaces_any_state() {
        let tasks = tasks();
        for start in [
            ViewState::Empty,
            ViewState::AddForm,
            ViewState::TaskDetails(id("1")),
            ViewState::EditForm(id("3")),
        ] {
            assert_eq!(
                step(&start, ViewEvent::SelectTask(id("2")), &tasks),
                ViewState::TaskDetails(id("2"))
            );
        }
        assert_eq!(step(&ViewState::AddForm, ViewEvent::SelectTask(id("nope")), &tasks), ViewState::Empty);
    }

    #[test]
    fn test_edit_only_from_details() {
        let tasks = tasks();
        assert_eq!(
            step(&ViewState::TaskDetails(id("1")), ViewEvent::ClickEdit, &tasks),
            ViewState::EditForm(id("1"))
        );
        assert_eq!(step(&ViewState::Empty, ViewEvent::ClickEdit, &tasks), ViewState::Empty);
        assert_eq!(step(&ViewState::AddForm, ViewEvent::ClickEdit, &tasks), ViewState::AddForm);
    }

    #[test]
    fn test_cancel_edit_returns_to_details_or_empty() {
        let tasks = tasks();
        let editing = ViewState::EditForm(id("2"));
        assert_eq!(step(&editing, ViewEvent::CancelEdit, &tasks), ViewState::TaskDetails(id("2")));

        let gone = ViewState::EditForm(id("42"));
        assert_eq!(step(&gone, ViewEvent::CancelEdit, &tasks), ViewState::Empty);

        assert_eq!(step(&ViewState::AddForm, ViewEvent::CancelEdit, &tasks), ViewState::AddForm);
    }

    #[test]
    fn test_click_outside_resets() {
        let tasks = tasks();
        for start in [
            ViewState::Empty,
            ViewState::AddForm,
            ViewState::TaskDetails(id("1")),
            ViewState::EditForm(id("1")),
        ] {
            assert_eq!(step(&start, ViewEvent::ClickOutside, &tasks), ViewState::Empty);
        }
    }

    #[test]
    fn test_layout_has_exactly_one_panel() {
        let tasks = tasks();
        let cases = [
            (ViewState::Empty, Panel::Empty),
            (ViewState::AddForm, Panel::AddForm),
            (ViewState::TaskDetails(id("1")), Panel::Details),
            (ViewState::EditForm(id("1")), Panel::Edit),
            (ViewState::TaskDetails(id("missing")), Panel::Empty),
        ];
        for (state, panel) in cases {
            let layout = state.layout(&tasks);
            assert_eq!(layout.panel, panel, "{:?}", state);
            assert_eq!(layout.dimmed, panel == Panel::AddForm);
            if panel == Panel::Empty || panel == Panel::AddForm {
                assert_eq!(layout.selected, None);
                assert_eq!(layout.tint, None);
            }
        }
    }

    #[test]
    fn test_select_medium_priority_tint() {
        let tasks = tasks();
        let state = step(&ViewState::Empty, ViewEvent::SelectTask(id("2")), &tasks);
        let layout = state.layout(&tasks);
        assert_eq!(layout.tint, Some("medium"));
        assert_eq!(layout.selected, Some(id("2")));
    }

    #[test]
    fn test_unmapped_priority_has_no_tint() {
        let tasks = tasks();
        let layout = ViewState::TaskDetails(id("4")).layout(&tasks);
        assert_eq!(layout.panel, Panel::Details);
        assert_eq!(layout.tint, None);
    }

    #[test]
    fn test_add_select_outside_sequence() {
        let tasks = tasks();
        let state = step(&ViewState::Empty, ViewEvent::ClickAdd, &tasks);
        let layout = state.layout(&tasks);
        assert_eq!(layout.panel, Panel::AddForm);
        assert!(layout.dimmed);

        let state = step(&state, ViewEvent::SelectTask(id("1")), &tasks);
        let layout = state.layout(&tasks);
        assert_eq!(layout.panel, Panel::Details);
        assert!(!layout.dimmed);
        assert_eq!(layout.tint, Some("high"));

        let state = step(&state, ViewEvent::ClickOutside, &tasks);
        let layout = state.layout(&tasks);
        assert_eq!(layout.panel, Panel::Empty);
        assert_eq!(layout.selected, None);
        assert_eq!(layout.tint, None);
    }

    #[test]
    fn test_checkbox_click_completes_and_selects_row() {
        use crate::completion::CompletionStore;
        use crate::storage::MemoryStorage;

        let tasks = tasks();
        let storage = MemoryStorage::default();
        let completion = CompletionStore::new(&storage);

        // A checkbox click toggles completion and also reaches the row
        let state = step(&ViewState::Empty, ViewEvent::ClickAdd, &tasks);
        completion.set_completed(&id("2"), true).unwrap();
        let state = step(&state, ViewEvent::SelectTask(id("2")), &tasks);

        assert_eq!(state, ViewState::TaskDetails(id("2")));
        assert!(completion.restore(&tasks).contains(&id("2")));
        let layout = state.layout(&tasks);
        assert_eq!(layout.panel, Panel::Details);
        assert!(!layout.dimmed);
        assert_eq!(layout.selected, Some(id("2")));
    }

    #[test]
    fn test_edit_keeps_selection_and_tint() {
        let tasks = tasks();
        let layout = ViewState::EditForm(id("3")).layout(&tasks);
        assert_eq!(layout.panel, Panel::Edit);
        assert_eq!(layout.selected, Some(id("3")));
        assert_eq!(layout.tint, Some("low"));
    }
}
