//! Login-failure classification.
//!
//! The backend reports auth failures as free-text messages with loosely
//! consistent status codes. Classification turns that into a typed
//! [`AppError`] so the caller can render a specific message per kind.

use crewdesk_core::error::{AppError, ErrorKind};

/// Classify a failed login response into a typed error.
///
/// Message text wins over status code: several distinct failures share
/// status 401/403 and are only distinguishable by their message.
pub fn classify_login_failure(status: u16, message: &str) -> AppError {
    let kind = classify_kind(status, message);
    let text = if message.is_empty() {
        format!("Login failed with status {status}")
    } else {
        message.to_string()
    };
    AppError::new(kind, text)
}

fn classify_kind(status: u16, message: &str) -> ErrorKind {
    let lower = message.to_lowercase();

    if lower.contains("locked") {
        return ErrorKind::AccountLocked;
    }
    if lower.contains("device limit")
        || lower.contains("device_limit")
        || lower.contains("too many devices")
        || lower.contains("maximum number of devices")
    {
        return ErrorKind::DeviceLimitReached;
    }
    if lower.contains("inactive") || lower.contains("deactivated") || lower.contains("disabled") {
        return ErrorKind::AccountInactive;
    }
    if lower.contains("invalid credentials")
        || lower.contains("incorrect password")
        || lower.contains("invalid email or password")
        || lower.contains("user not found")
    {
        return ErrorKind::InvalidCredentials;
    }
    if lower.contains("validation") {
        return ErrorKind::Validation;
    }
    if lower.contains("too many requests") || lower.contains("rate limit") {
        return ErrorKind::RateLimit;
    }

    match status {
        400 | 422 => ErrorKind::Validation,
        401 => ErrorKind::InvalidCredentials,
        423 => ErrorKind::AccountLocked,
        429 => ErrorKind::RateLimit,
        _ => ErrorKind::Unknown,
    }
}
