//! Unified application error types for CrewDesk.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire SDK.
///
/// Authentication failures are classified into specific kinds at the
/// service boundary so callers can render a precise message per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Username or password was rejected by the backend.
    InvalidCredentials,
    /// The account is locked (too many failed attempts, admin action).
    AccountLocked,
    /// The account has reached its registered-device limit.
    DeviceLimitReached,
    /// The account exists but is deactivated.
    AccountInactive,
    /// Input validation failed.
    Validation,
    /// A rate limit was exceeded.
    RateLimit,
    /// The request never produced an HTTP response (DNS, connect, I/O).
    Network,
    /// The authenticated principal's role does not match the session domain.
    AccessDenied,
    /// The token refresh failed and the session was cleared.
    SessionExpired,
    /// No access token is available for an authenticated request.
    NoToken,
    /// A persistent-storage error occurred.
    Storage,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A configuration error occurred.
    Configuration,
    /// The backend returned an error we could not classify.
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::AccountLocked => write!(f, "ACCOUNT_LOCKED"),
            Self::DeviceLimitReached => write!(f, "DEVICE_LIMIT_REACHED"),
            Self::AccountInactive => write!(f, "ACCOUNT_INACTIVE"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::RateLimit => write!(f, "RATE_LIMIT"),
            Self::Network => write!(f, "NETWORK"),
            Self::AccessDenied => write!(f, "ACCESS_DENIED"),
            Self::SessionExpired => write!(f, "SESSION_EXPIRED"),
            Self::NoToken => write!(f, "NO_TOKEN"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The unified application error used throughout CrewDesk.
///
/// All crate-specific errors are mapped into `AppError` using `From`
/// impls or explicit `.map_err()` calls. This provides a single error
/// type for the entire SDK boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-credentials error.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCredentials, message)
    }

    /// Create an account-locked error.
    pub fn account_locked(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccountLocked, message)
    }

    /// Create a device-limit error.
    pub fn device_limit_reached(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeviceLimitReached, message)
    }

    /// Create an account-inactive error.
    pub fn account_inactive(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccountInactive, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a rate-limit error.
    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RateLimit, message)
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    /// Create an access-denied error.
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccessDenied, message)
    }

    /// Create a session-expired error.
    pub fn session_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SessionExpired, message)
    }

    /// Create a no-token error.
    pub fn no_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoToken, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an unknown error.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::with_source(ErrorKind::Network, format!("HTTP error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
