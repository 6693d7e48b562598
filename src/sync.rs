//! Task Sync Engine
//!
//! Session-gated CRUD over the task API. Every successful mutation is
//! followed by a full list fetch, and the client list is replaced
//! wholesale by the server's answer. Nothing is patched locally.
//!
//! Overlapping list fetches resolve last-write-wins: each fetch takes a
//! generation number and answers from older generations are dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::api::TaskApi;
use crate::error::{ApiError, ApiResult, SyncError};
use crate::models::{Task, TaskPatch};
use crate::session::SessionStore;
use crate::validation;

pub const ADD_FAILED: &str = "Failed to add task.";
pub const TOGGLE_FAILED: &str = "Failed to toggle task status.";
pub const EDIT_FAILED: &str = "Failed to edit task.";
pub const DELETE_FAILED: &str = "Failed to delete task.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// No token; the auth view is the only way forward
    #[default]
    Unauthenticated,
    /// Token present, nothing fetched yet
    Idle,
    Loading,
    Ready,
}

pub struct TaskSyncEngine<A, S> {
    api: Rc<A>,
    session: Rc<S>,
    tasks: RefCell<Vec<Task>>,
    state: Cell<SyncState>,
    generation: Cell<u64>,
}

impl<A: TaskApi, S: SessionStore> TaskSyncEngine<A, S> {
    pub fn new(api: Rc<A>, session: Rc<S>) -> Self {
        let state = if session.is_signed_in() {
            SyncState::Idle
        } else {
            SyncState::Unauthenticated
        };
        Self {
            api,
            session,
            tasks: RefCell::new(Vec::new()),
            state: Cell::new(state),
            generation: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn state(&self) -> SyncState {
        self.state.get()
    }

    /// Copy of the list from the last successful fetch
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }

    /// Replace the client list with the server's current list
    pub async fn list(&self) -> Result<(), SyncError> {
        let token = self.token()?;

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let previous = self.state.replace(SyncState::Loading);

        let result = self.api.list_tasks(&token).await;
        if generation != self.generation.get() {
            log::debug!("dropping superseded task list (generation {})", generation);
            return Ok(());
        }

        match result {
            Ok(tasks) => {
                log::debug!("loaded {} tasks", tasks.len());
                *self.tasks.borrow_mut() = tasks;
                self.state.set(SyncState::Ready);
                Ok(())
            }
            Err(ApiError::Rejected { status, .. }) => {
                log::warn!("task list refused with status {}, signing out", status);
                if self.sign_out() {
                    Err(SyncError::SessionRejected)
                } else {
                    Err(SyncError::NotSignedIn)
                }
            }
            Err(ApiError::Network(e)) => {
                log::warn!("task list unavailable: {}", e);
                let restored = match previous {
                    SyncState::Ready => SyncState::Ready,
                    _ => SyncState::Idle,
                };
                self.state.set(restored);
                Err(SyncError::Network)
            }
        }
    }

    pub async fn create(&self, title: &str) -> Result<(), SyncError> {
        validation::validate_title(title)?;
        let token = self.token()?;

        let outcome = self.api.create_task(&token, title).await;
        self.refetch_after(outcome, ADD_FAILED).await
    }

    /// Flip completion of a task currently in the list
    pub async fn toggle(&self, id: &str, currently_completed: bool) -> Result<(), SyncError> {
        let listed = self.tasks.borrow().iter().any(|task| task.id == id);
        if !listed {
            log::warn!("toggle requested for unknown task {}", id);
            return Err(SyncError::Failed(TOGGLE_FAILED));
        }
        let token = self.token()?;

        let patch = TaskPatch::completed(!currently_completed);
        let outcome = self.api.update_task(&token, id, &patch).await;
        self.refetch_after(outcome, TOGGLE_FAILED).await
    }

    pub async fn update(&self, id: &str, title: &str) -> Result<(), SyncError> {
        validation::validate_title(title)?;
        let token = self.token()?;

        let outcome = self.api.update_task(&token, id, &TaskPatch::title(title)).await;
        self.refetch_after(outcome, EDIT_FAILED).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), SyncError> {
        let token = self.token()?;

        let outcome = self.api.delete_task(&token, id).await;
        self.refetch_after(outcome, DELETE_FAILED).await
    }

    pub fn logout(&self) {
        if self.sign_out() {
            log::info!("signed out");
        }
    }

    fn token(&self) -> Result<String, SyncError> {
        match self.session.get() {
            Some(token) => Ok(token),
            None => {
                self.sign_out();
                Err(SyncError::NotSignedIn)
            }
        }
    }

    async fn refetch_after(&self, outcome: ApiResult<()>, alert: &'static str) -> Result<(), SyncError> {
        if let Err(e) = outcome {
            log::warn!("{} ({})", alert, e);
            return Err(SyncError::Failed(alert));
        }
        self.list().await
    }

    /// Drop token, list and in-flight fetches. Returns whether this call
    /// performed the transition to `Unauthenticated`.
    fn sign_out(&self) -> bool {
        self.generation.set(self.generation.get() + 1);
        self.tasks.borrow_mut().clear();
        self.session.clear();
        self.state.replace(SyncState::Unauthenticated) != SyncState::Unauthenticated
    }
}
