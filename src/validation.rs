//! Client-side Validation
//!
//! Runs before any request leaves the browser.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

// Lengths are UTF-16 code units, the way the browser measures input values.

/// Shortest accepted task title, counted after trimming
pub const MIN_TITLE_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 8;

fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }

    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if input_len(password) < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(ValidationError::PasswordComposition);
    }

    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if input_len(title.trim()) < MIN_TITLE_CHARS {
        return Err(ValidationError::TitleTooShort);
    }
    Ok(())
}
