//! File-backed persistent key-value store.
//!
//! The on-disk document is a flat JSON object of string keys to string
//! values, the same shape browsers use for local storage.

use crate::storage::{AtomicFile, FileFormat};
use cine_core::Result;
use cine_core::session::KeyValueStore;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

type Entries = BTreeMap<String, String>;

/// Key-value store persisted to a single JSON file.
///
/// Reads are served from an in-memory copy loaded at open. Writes go through
/// a locked read-modify-write of the file, then refresh the copy.
pub struct FileKeyValueStore {
    file: AtomicFile<Entries>,
    entries: RwLock<Entries>,
}

impl FileKeyValueStore {
    /// Opens the store at `path`, creating nothing until the first write.
    ///
    /// A corrupt file is logged and reset to an empty store.
    pub fn open(path: PathBuf) -> Result<Self> {
        let file = AtomicFile::new(path, FileFormat::Json);
        let entries = match file.load() {
            Ok(loaded) => loaded.unwrap_or_default(),
            Err(e) if e.is_serialization() => {
                tracing::warn!(
                    "[LocalStorage] Resetting unreadable store {}: {}",
                    file.path().display(),
                    e
                );
                let empty = Entries::new();
                file.save(&empty)?;
                empty
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(
            "[LocalStorage] Opened {} ({} keys)",
            file.path().display(),
            entries.len()
        );

        Ok(Self {
            file,
            entries: RwLock::new(entries),
        })
    }

    fn write<F>(&self, f: F) -> Result<()>
    where
        F: Fn(&mut Entries),
    {
        let mut snapshot = Entries::new();
        self.file.update(Entries::new(), |entries| {
            f(entries);
            snapshot = entries.clone();
            Ok(())
        })?;

        let mut guard = self
            .entries
            .write()
            .map_err(|e| cine_core::CineError::internal(format!("Storage lock poisoned: {}", e)))?;
        *guard = snapshot;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .entries
            .read()
            .map_err(|e| cine_core::CineError::internal(format!("Storage lock poisoned: {}", e)))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.write(|entries| {
            entries.remove(key);
        })
    }
}
