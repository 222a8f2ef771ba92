//! Token value types for the access/refresh pair.

use serde::{Deserialize, Serialize};

/// A pair of opaque bearer tokens issued on login or refresh.
///
/// The access token is a JWT whose payload the client may inspect for
/// the `exp` claim; the refresh token is never inspected. The backend
/// rotates the refresh token on every refresh call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived access token sent as the bearer credential.
    pub access_token: String,
    /// Long-lived refresh token exchanged for a new pair.
    pub refresh_token: String,
}
