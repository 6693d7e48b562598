//! Task API Bindings
//!
//! `TaskApi` is the seam between the sync core and the network. The
//! browser build talks HTTP through `HttpApi`; tests use `FakeApi`.

mod http;
#[cfg(test)]
mod fake;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{AuthMode, Credentials, Task, TaskPatch};

pub use http::HttpApi;
#[cfg(test)]
pub use fake::{FakeApi, Request};

// ========================
// Endpoints
// ========================

pub const LIST_TASKS: &str = "/tasks/getTask";
pub const CREATE_TASK: &str = "/tasks/createTask";
pub const UPDATE_TASK: &str = "/tasks/updateTask";
pub const DELETE_TASK: &str = "/tasks/deleteTask";

/// Remote task API
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Exchange credentials for a bearer token
    async fn authenticate(&self, mode: AuthMode, credentials: &Credentials<'_>) -> ApiResult<String>;

    async fn list_tasks(&self, token: &str) -> ApiResult<Vec<Task>>;

    async fn create_task(&self, token: &str, title: &str) -> ApiResult<()>;

    async fn update_task(&self, token: &str, id: &str, patch: &TaskPatch<'_>) -> ApiResult<()>;

    async fn delete_task(&self, token: &str, id: &str) -> ApiResult<()>;
}
