//! Session-related domain events.

use serde::{Deserialize, Serialize};

/// Events related to the local user session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A user logged in and a session was established.
    LoggedIn {
        /// The user ID.
        user_id: String,
        /// The user's email address.
        email: String,
    },
    /// The user logged out and the session was cleared.
    LoggedOut {
        /// The user ID, when one was known at logout time.
        user_id: Option<String>,
    },
    /// The session expired because a token refresh failed.
    Expired {
        /// Why the refresh was rejected.
        reason: String,
    },
    /// The current user's profile was updated locally.
    UserUpdated {
        /// The user ID.
        user_id: String,
    },
}
