//! HTTP Task API
//!
//! `reqwest` client (fetch-backed on wasm32) for the REST endpoints.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response};

use super::{TaskApi, CREATE_TASK, DELETE_TASK, LIST_TASKS, UPDATE_TASK};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthMode, AuthResponse, Credentials, ErrorBody, NewTask, Task, TaskPatch};

/// Characters left as-is in a path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);

        let client = builder.build().unwrap_or_else(|e| {
            log::warn!("falling back to default HTTP client: {}", e);
            Client::new()
        });
        Self { client, config }
    }

    fn task_url(&self, path: &str, id: &str) -> String {
        format!("{}/{}", self.config.endpoint(path), utf8_percent_encode(id, PATH_SEGMENT))
    }

    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header("Authorization", format!("Bearer {}", token))
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        with_timeout(self.config.timeout, request.send())
            .await?
            .map_err(network_error)
    }

    /// Pass 2xx through; anything else becomes `Rejected` with the server's message
    async fn expect_ok(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.json::<ErrorBody>().await.ok().and_then(|body| body.message);
        log::debug!("request rejected: {} {:?}", status, message);
        Err(ApiError::Rejected { status: status.as_u16(), message })
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpApi {
    async fn authenticate(&self, mode: AuthMode, credentials: &Credentials<'_>) -> ApiResult<String> {
        let url = self.config.endpoint(mode.path());
        log::debug!("POST {}", url);

        let response = self.send(self.client.post(&url).json(credentials)).await?;
        let status = response.status();
        let body: AuthResponse = response.json().await.map_err(network_error)?;

        match body.token.filter(|token| !token.is_empty()) {
            Some(token) if status.is_success() => Ok(token),
            _ => Err(ApiError::Rejected { status: status.as_u16(), message: body.message }),
        }
    }

    async fn list_tasks(&self, token: &str) -> ApiResult<Vec<Task>> {
        let url = self.config.endpoint(LIST_TASKS);
        log::debug!("GET {}", url);

        let response = self.send(self.authorized(self.client.get(&url), token)).await?;
        Self::expect_ok(response).await?.json().await.map_err(network_error)
    }

    async fn create_task(&self, token: &str, title: &str) -> ApiResult<()> {
        let url = self.config.endpoint(CREATE_TASK);
        log::debug!("POST {}", url);

        let request = self.authorized(self.client.post(&url), token).json(&NewTask { title });
        Self::expect_ok(self.send(request).await?).await?;
        Ok(())
    }

    async fn update_task(&self, token: &str, id: &str, patch: &TaskPatch<'_>) -> ApiResult<()> {
        let url = self.task_url(UPDATE_TASK, id);
        log::debug!("PUT {}", url);

        let request = self.authorized(self.client.put(&url), token).json(patch);
        Self::expect_ok(self.send(request).await?).await?;
        Ok(())
    }

    async fn delete_task(&self, token: &str, id: &str) -> ApiResult<()> {
        let url = self.task_url(DELETE_TASK, id);
        log::debug!("DELETE {}", url);

        let request = self.authorized(self.client.delete(&url), token);
        Self::expect_ok(self.send(request).await?).await?;
        Ok(())
    }
}

fn network_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network("request timed out".to_string())
    } else {
        ApiError::Network(e.to_string())
    }
}

/// fetch has no built-in deadline, so race the request against a timer
#[cfg(target_arch = "wasm32")]
async fn with_timeout<F: Future>(timeout: Duration, request: F) -> ApiResult<F::Output> {
    use futures_util::future::{select, Either};

    let request = std::pin::pin!(request);
    let deadline = std::pin::pin!(gloo_timers::future::sleep(timeout));

    match select(request, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::Network(format!(
            "request timed out after {} ms",
            timeout.as_millis()
        ))),
    }
}

/// Native builds set the deadline on the client itself
#[cfg(not(target_arch = "wasm32"))]
async fn with_timeout<F: Future>(_timeout: Duration, request: F) -> ApiResult<F::Output> {
    Ok(request.await)
}
