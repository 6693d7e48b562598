//! Error Types
//!
//! Every failure is recoverable and lands on a visible screen. The
//! `Display` text of the user-facing variants is the message shown.

use thiserror::Error;

/// Client-side input checks; blocks the request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Password is required.")]
    PasswordRequired,
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
    #[error("Password must contain at least one letter and one number.")]
    PasswordComposition,
    #[error("Task title must be at least 3 characters long.")]
    TitleTooShort,
}

/// Outcome of a single API call that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-ok status
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The call itself failed (unreachable, timeout, undecodable body)
    #[error("request failed: {0}")]
    Network(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

pub const AUTH_FAILED: &str = "Authentication failed. Please try again.";

/// Failure of a login/register submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Server message verbatim, or the generic fallback
    #[error("{0}")]
    Rejected(String),
    #[error("An error occurred. Please try again later.")]
    Network,
}

/// Failure of a task sync operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Please log in to continue.")]
    NotSignedIn,
    /// The list fetch was refused; the session has just been cleared
    #[error("Your session has ended. Please log in again.")]
    SessionRejected,
    /// Mutation refused by the server, carries the alert text
    #[error("{0}")]
    Failed(&'static str),
    /// The list fetch could not reach the server
    #[error("Could not load tasks. Please try again later.")]
    Network,
}

impl SyncError {
    /// True when the error came from the follow-up list fetch, meaning the
    /// mutation itself was accepted.
    pub fn after_mutation(&self) -> bool {
        matches!(self, SyncError::SessionRejected | SyncError::Network)
    }
}
