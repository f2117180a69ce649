//! Client-local key/value storage.
//!
//! Mirrors the browser `localStorage` contract: string keys, string values,
//! every write replaces the whole value. Callers treat writes as best-effort.

use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Flat map of encoded progress keys to booleans.
pub const PROGRESS_KEY: &str = "progress-store";
/// Layout version of `PROGRESS_KEY`.
pub const PROGRESS_VERSION_KEY: &str = "progress-store-version";
/// Pre-versioning location of the progress map.
pub const LEGACY_PROGRESS_KEY: &str = "vd_prog";
pub const THEME_KEY: &str = "theme-preference";
pub const ACTIVITY_KEY: &str = "activity-log";
pub const STREAK_COUNT_KEY: &str = "streak-count";
pub const STREAK_LAST_DAY_KEY: &str = "streak-last-day";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage quota exceeded ({used} of {quota} bytes)")]
    QuotaExceeded { used: usize, quota: usize },

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value for '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

/// A synchronous, process-local key/value store.
///
/// Implementations use interior mutability so one store can be shared between
/// the progress ledger and the dashboard preferences.
pub trait LocalStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads a JSON value stored under `key`.
/// A missing key is `Ok(None)`; an unparseable value is `StorageError::Corrupt`.
pub fn read_json<T: serde::de::DeserializeOwned>(
    store: &dyn LocalStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Serializes `value` as JSON and stores it under `key`.
pub fn write_json<T: serde::Serialize>(
    store: &dyn LocalStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Corrupt {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw)
}
