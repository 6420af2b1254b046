//! Backend and Browser Command Wrappers
//!
//! Requests to the task server and the page-level browser actions
//! (confirm, reload, navigation) that follow them, organized by domain.

mod task;
mod browser;

// Re-export all public items
pub use task::*;
pub use browser::*;
