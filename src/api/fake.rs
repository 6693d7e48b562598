//! In-memory Task API for tests
//!
//! Behaves like the REST backend: one account table, one task list, one
//! valid token at a time. Every call is recorded so tests can assert on
//! what went over the wire and what did not.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use super::TaskApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthMode, Credentials, Task, TaskPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Authenticate(AuthMode),
    List,
    Create(String),
    Update { id: String, title: Option<String>, is_completed: Option<bool> },
    Delete(String),
}

#[derive(Debug, Default)]
pub struct FakeApi {
    accounts: RefCell<HashMap<String, String>>,
    tasks: RefCell<Vec<Task>>,
    next_id: Cell<u32>,
    valid_token: RefCell<Option<String>>,
    requests: RefCell<Vec<Request>>,
    /// Injected failure for the next non-list call
    fail_next: RefCell<Option<ApiError>>,
    offline: Cell<bool>,
    /// Yields before answering each queued list call, oldest first
    list_delays: RefCell<VecDeque<usize>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(email: &str, password: &str) -> Self {
        let api = Self::new();
        api.accounts.borrow_mut().insert(email.to_string(), password.to_string());
        api
    }

    /// Accept `token` on protected calls
    pub fn issue_token(&self, token: &str) {
        *self.valid_token.borrow_mut() = Some(token.to_string());
    }

    pub fn revoke_tokens(&self) {
        self.valid_token.borrow_mut().take();
    }

    /// Add a task directly on the server side
    pub fn seed(&self, title: &str, is_completed: bool) -> String {
        let id = self.allocate_id();
        self.tasks.borrow_mut().push(Task { id: id.clone(), title: title.to_string(), is_completed });
        id
    }

    pub fn server_tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn fail_next(&self, error: ApiError) {
        *self.fail_next.borrow_mut() = Some(error);
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn delay_next_list(&self, yields: usize) {
        self.list_delays.borrow_mut().push_back(yields);
    }

    fn allocate_id(&self) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("task-{id}")
    }

    fn record(&self, request: Request) {
        self.requests.borrow_mut().push(request);
    }

    fn check_reachable(&self) -> ApiResult<()> {
        if self.offline.get() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }

    fn check_token(&self, token: &str) -> ApiResult<()> {
        if self.valid_token.borrow().as_deref() == Some(token) {
            Ok(())
        } else {
            Err(rejected(401, "Unauthorized"))
        }
    }

    fn take_failure(&self) -> ApiResult<()> {
        match self.fail_next.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn rejected(status: u16, message: &str) -> ApiError {
    ApiError::Rejected { status, message: Some(message.to_string()) }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn authenticate(&self, mode: AuthMode, credentials: &Credentials<'_>) -> ApiResult<String> {
        self.record(Request::Authenticate(mode));
        self.check_reachable()?;
        self.take_failure()?;

        let mut accounts = self.accounts.borrow_mut();
        match mode {
            AuthMode::Login => match accounts.get(credentials.email) {
                Some(password) if password == credentials.password => {}
                _ => return Err(rejected(400, "Invalid credentials")),
            },
            AuthMode::Register => {
                if accounts.contains_key(credentials.email) {
                    return Err(rejected(400, "User already exists"));
                }
                accounts.insert(credentials.email.to_string(), credentials.password.to_string());
            }
        }

        let token = format!("token-{}", credentials.email);
        *self.valid_token.borrow_mut() = Some(token.clone());
        Ok(token)
    }

    async fn list_tasks(&self, token: &str) -> ApiResult<Vec<Task>> {
        self.record(Request::List);
        self.check_reachable()?;
        self.check_token(token)?;

        let snapshot = self.server_tasks();
        let yields = self.list_delays.borrow_mut().pop_front().unwrap_or(0);
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }
        Ok(snapshot)
    }

    async fn create_task(&self, token: &str, title: &str) -> ApiResult<()> {
        self.record(Request::Create(title.to_string()));
        self.check_reachable()?;
        self.check_token(token)?;
        self.take_failure()?;

        self.seed(title, false);
        Ok(())
    }

    async fn update_task(&self, token: &str, id: &str, patch: &TaskPatch<'_>) -> ApiResult<()> {
        self.record(Request::Update {
            id: id.to_string(),
            title: patch.title.map(str::to_string),
            is_completed: patch.is_completed,
        });
        self.check_reachable()?;
        self.check_token(token)?;
        self.take_failure()?;

        let mut tasks = self.tasks.borrow_mut();
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| rejected(404, "Task not found"))?;
        if let Some(title) = patch.title {
            task.title = title.to_string();
        }
        if let Some(is_completed) = patch.is_completed {
            task.is_completed = is_completed;
        }
        Ok(())
    }

    async fn delete_task(&self, token: &str, id: &str) -> ApiResult<()> {
        self.record(Request::Delete(id.to_string()));
        self.check_reachable()?;
        self.check_token(token)?;
        self.take_failure()?;

        let mut tasks = self.tasks.borrow_mut();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(rejected(404, "Task not found"));
        }
        Ok(())
    }
}
