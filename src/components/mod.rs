//! UI Components
//!
//! Leptos components for the auth page and the task dashboard.

mod auth_page;
mod dashboard;
mod edit_task_modal;
mod feedback;
mod new_task_form;
mod task_row;

pub use auth_page::AuthPage;
pub use dashboard::DashboardPage;
pub use edit_task_modal::EditTaskModal;
pub use feedback::SyncFeedback;
pub use new_task_form::NewTaskForm;
pub use task_row::TaskRow;
