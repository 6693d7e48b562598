//! Frontend Models
//!
//! Data structures matching the task API's JSON.

use serde::{Deserialize, Serialize};

/// Task as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
}

/// Which auth endpoint a credential submission goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn path(&self) -> &'static str {
        match self {
            AuthMode::Login => "/auth/login",
            AuthMode::Register => "/auth/register",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    /// Text of the link that flips to the other mode
    pub fn switch_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Switch to Register",
            AuthMode::Register => "Switch to Login",
        }
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
}

/// Partial update; absent fields are left untouched server-side
#[derive(Debug, Default, Serialize)]
pub struct TaskPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(rename = "isCompleted", skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl<'a> TaskPatch<'a> {
    pub fn title(title: &'a str) -> Self {
        Self { title: Some(title), ..Default::default() }
    }

    pub fn completed(is_completed: bool) -> Self {
        Self { is_completed: Some(is_completed), ..Default::default() }
    }
}

// ========================
// Response Bodies
// ========================

/// Body of `/auth/login` and `/auth/register`, success or failure
#[derive(Debug, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the API sends alongside non-ok statuses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
