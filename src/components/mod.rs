//! UI Components
//!
//! Leptos components for the task board.

mod task_list;
mod task_view_box;
mod task_form_fields;
mod add_task_form;
mod task_details;
mod edit_task_form;
mod toast;
mod profile_popover;
mod sort_bar;

pub use task_list::TaskList;
pub use task_view_box::TaskViewBox;
pub use task_form_fields::TaskFormFields;
pub use add_task_form::AddTaskForm;
pub use task_details::TaskDetails;
pub use edit_task_form::EditTaskForm;
pub use toast::Toast;
pub use profile_popover::ProfilePopover;
pub use sort_bar::SortBar;
