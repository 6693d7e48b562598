//! API Configuration
//!
//! Where the task API lives and how long a request may take. Values are
//! baked in at build time (`TASK_DASH_API_BASE`, `TASK_DASH_TIMEOUT_MS`)
//! and fall back to the local development server.

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:4000/api";
/// localStorage key holding the bearer token
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    pub token_key: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ApiConfig {
    /// Configuration captured from the build environment
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TASK_DASH_API_BASE"),
            option_env!("TASK_DASH_TIMEOUT_MS"),
        )
    }

    fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(base) = base_url.map(str::trim).filter(|b| !b.is_empty()) {
            config.base_url = base.trim_end_matches('/').to_string();
        }

        if let Some(raw) = timeout_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.timeout = Duration::from_millis(ms),
                _ => log::warn!("ignoring invalid TASK_DASH_TIMEOUT_MS value {:?}", raw),
            }
        }

        config
    }

    /// Absolute URL for an API path such as `/tasks/getTask`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
