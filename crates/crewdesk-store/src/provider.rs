//! Storage manager that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use crewdesk_core::config::StorageConfig;
use crewdesk_core::result::AppResult;
use crewdesk_core::traits::KeyValueStore;

use crate::file::FileStore;
use crate::memory::MemoryStore;

/// Storage manager that wraps the configured key-value provider.
///
/// The provider is selected at construction time: an empty path selects
/// the in-memory store, anything else opens a file store at that path.
#[derive(Debug, Clone)]
pub struct StorageManager {
    inner: Arc<dyn KeyValueStore>,
}

impl StorageManager {
    /// Create a new storage manager from configuration.
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        let inner: Arc<dyn KeyValueStore> = if config.path.is_empty() {
            info!("Initializing in-memory session storage");
            Arc::new(MemoryStore::new())
        } else {
            info!(path = %config.path, "Initializing file session storage");
            Arc::new(FileStore::open(&config.path)?)
        };

        Ok(Self { inner })
    }

    /// Create a storage manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn KeyValueStore>) -> Self {
        Self { inner: provider }
    }

    /// The underlying provider handle.
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.inner)
    }
}
