//! Response types for backend API endpoints.

use serde::{Deserialize, Serialize};

/// Standard API error response body.
///
/// The backend is inconsistent about which field carries the
/// human-readable text, so both are optional and [`ApiErrorResponse::text`]
/// picks whichever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Optional details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiErrorResponse {
    /// The best available human-readable error text.
    pub fn text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("")
    }
}
