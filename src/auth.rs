//! Auth Flow
//!
//! Validates credentials locally, trades them for a bearer token and
//! stores the token in the session.

use crate::api::TaskApi;
use crate::error::{ApiError, AuthFailure, AUTH_FAILED};
use crate::models::{AuthMode, Credentials};
use crate::session::SessionStore;
use crate::validation;

/// Submit credentials for `mode`. No request is sent when validation fails.
pub async fn submit_credentials<A, S>(
    api: &A,
    session: &S,
    email: &str,
    password: &str,
    mode: AuthMode,
) -> Result<String, AuthFailure>
where
    A: TaskApi + ?Sized,
    S: SessionStore + ?Sized,
{
    validation::validate_credentials(email, password)?;

    let credentials = Credentials { email, password };
    match api.authenticate(mode, &credentials).await {
        Ok(token) => {
            log::info!("{} succeeded", mode.label());
            session.set(&token);
            Ok(token)
        }
        Err(ApiError::Rejected { status, message }) => {
            log::warn!("{} rejected with status {}", mode.label(), status);
            let message = message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| AUTH_FAILED.to_string());
            Err(AuthFailure::Rejected(message))
        }
        Err(ApiError::Network(e)) => {
            log::warn!("{} failed: {}", mode.label(), e);
            Err(AuthFailure::Network)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FakeApi, Request};
    use crate::error::ValidationError;
    use crate::session::MemorySession;

    #[tokio::test]
    async fn test_login_stores_token() {
        let api = FakeApi::with_account("a@b.com", "abc12345");
        let session = MemorySession::default();

        let token = submit_credentials(&api, &session, "a@b.com", "abc12345", AuthMode::Login)
            .await
            .expect("login should succeed");

        assert_eq!(session.get(), Some(token));
        assert_eq!(api.requests(), vec![Request::Authenticate(AuthMode::Login)]);
    }

    #[tokio::test]
    async fn test_invalid_credentials_never_reach_the_server() {
        let api = FakeApi::with_account("a@b.com", "abc12345");
        let session = MemorySession::default();

        let cases = [
            ("", "abc12345", ValidationError::EmailRequired),
            ("not-an-email", "abc12345", ValidationError::EmailInvalid),
            ("a@b.com", "", ValidationError::PasswordRequired),
            ("a@b.com", "ab1", ValidationError::PasswordTooShort),
            ("a@b.com", "abcdefghij", ValidationError::PasswordComposition),
        ];
        for (email, password, expected) in cases {
            for mode in [AuthMode::Login, AuthMode::Register] {
                let result = submit_credentials(&api, &session, email, password, mode).await;
                assert_eq!(result, Err(AuthFailure::Validation(expected.clone())));
            }
        }

        assert!(api.requests().is_empty());
        assert_eq!(session.get(), None);
    }

    #[tokio::test]
    async fn test_server_message_is_surfaced_verbatim() {
        let api = FakeApi::with_account("a@b.com", "abc12345");
        let session = MemorySession::default();

        let wrong = submit_credentials(&api, &session, "a@b.com", "wrong1234", AuthMode::Login).await;
        assert_eq!(wrong, Err(AuthFailure::Rejected("Invalid credentials".to_string())));

        let taken = submit_credentials(&api, &session, "a@b.com", "abc12345", AuthMode::Register).await;
        assert_eq!(taken, Err(AuthFailure::Rejected("User already exists".to_string())));

        assert_eq!(session.get(), None);
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_generic_text() {
        let api = FakeApi::with_account("a@b.com", "abc12345");
        api.fail_next(ApiError::Rejected { status: 500, message: None });
        let session = MemorySession::default();

        let result = submit_credentials(&api, &session, "a@b.com", "abc12345", AuthMode::Login).await;
        assert_eq!(result, Err(AuthFailure::Rejected(AUTH_FAILED.to_string())));
    }

    #[tokio::test]
    async fn test_network_failure_is_recoverable() {
        let api = FakeApi::with_account("a@b.com", "abc12345");
        api.set_offline(true);
        let session = MemorySession::default();

        let result = submit_credentials(&api, &session, "a@b.com", "abc12345", AuthMode::Login).await;
        assert_eq!(result, Err(AuthFailure::Network));

        api.set_offline(false);
        let retry = submit_credentials(&api, &session, "a@b.com", "abc12345", AuthMode::Login).await;
        assert!(retry.is_ok());
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let api = FakeApi::new();
        let session = MemorySession::default();

        submit_credentials(&api, &session, "new@user.io", "s3cretpass", AuthMode::Register)
            .await
            .expect("register should succeed");
        session.clear();

        submit_credentials(&api, &session, "new@user.io", "s3cretpass", AuthMode::Login)
            .await
            .expect("login should succeed");
        assert!(session.is_signed_in());
    }
}
