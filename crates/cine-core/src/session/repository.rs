//! Key-value storage port.

use crate::error::Result;

/// Persistent string key-value storage that survives restarts.
///
/// Mirrors the browser's local storage: flat string keys, string values,
/// synchronous access.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
