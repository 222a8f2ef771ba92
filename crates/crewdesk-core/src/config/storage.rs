//! Local session-storage configuration.

use serde::{Deserialize, Serialize};

/// Settings for the persistent key-value store backing session vaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the JSON document holding persisted session state.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "data/session.json".to_string()
}
