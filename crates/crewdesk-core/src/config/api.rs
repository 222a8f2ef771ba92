//! Backend API configuration.

use serde::{Deserialize, Serialize};

/// Settings for reaching the CrewDesk backend REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL prepended to relative request paths.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}
