//! In-memory key-value store backed by a concurrent map.

use dashmap::DashMap;

use crewdesk_core::result::AppResult;
use crewdesk_core::traits::KeyValueStore;

/// In-memory [`KeyValueStore`] used in tests and for ephemeral sessions
/// that should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.iter().map(|e| e.key().clone()).collect())
    }
}
