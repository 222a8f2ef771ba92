//! Key-value store persisted as a single JSON document on disk.
//!
//! This is the durable analog of browser local storage: string keys,
//! string values, no expiry. Every write rewrites the document, so a
//! read immediately following a write observes the new value.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::warn;

use crewdesk_core::error::AppError;
use crewdesk_core::result::AppResult;
use crewdesk_core::traits::KeyValueStore;

/// File-backed [`KeyValueStore`].
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, loading any existing document.
    ///
    /// A missing file starts empty. An unreadable or corrupt document
    /// also starts empty (with a warning): stale local session state is
    /// recoverable by logging in again, so it must never brick startup.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "discarding corrupt session store");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(AppError::from(e)),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// The path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn write_locked(
        &self,
        mutate: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::storage("session store lock poisoned"))?;
        mutate(&mut entries);
        self.persist(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::storage("session store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.write_locked(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.write_locked(|entries| {
            entries.remove(key);
        })
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::storage("session store lock poisoned"))?;
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("crewdesk-store-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn test_roundtrip_survives_reopen() {
        let path = temp_path();
        {
            let store = FileStore::open(&path).unwrap();
            store.set("k", "v").unwrap();
        }
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap(), Some("v".to_string()));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let path = temp_path();
        let store = FileStore::open(&path).unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let path = temp_path();
        fs::write(&path, "{ not json").unwrap();
        let store = FileStore::open(&path).unwrap();
        assert!(store.keys().unwrap().is_empty());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_remove_persists() {
        let path = temp_path();
        {
            let store = FileStore::open(&path).unwrap();
            store.set("k", "v").unwrap();
            store.remove("k").unwrap();
        }
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap(), None);
        let _ = fs::remove_file(&path);
    }
}
