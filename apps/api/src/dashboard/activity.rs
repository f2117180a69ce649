use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{read_json, write_json, LocalStore, StorageError, ACTIVITY_KEY};

/// Entries kept in the feed; older ones are dropped on write.
pub const MAX_ACTIVITY: usize = 20;

/// Held across the read-modify-write of the feed so concurrent records never
/// overwrite each other.
static FEED_WRITE: Mutex<()> = parking_lot::const_mutex(());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Newest-first feed. Unreadable data is logged and treated as empty.
pub fn entries(store: &dyn LocalStore) -> Vec<ActivityEntry> {
    match read_json::<Vec<ActivityEntry>>(store, ACTIVITY_KEY) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring stored activity feed: {e}");
            Vec::new()
        }
    }
}

pub fn record(
    store: &dyn LocalStore,
    message: impl Into<String>,
    at: DateTime<Utc>,
) -> Result<(), StorageError> {
    let _guard = FEED_WRITE.lock();
    let mut feed = entries(store);
    feed.insert(
        0,
        ActivityEntry {
            message: message.into(),
            at,
        },
    );
    feed.truncate(MAX_ACTIVITY);
    write_json(store, ACTIVITY_KEY, &feed)
}

/// Records an entry, logging instead of failing when the store refuses it.
pub fn record_best_effort(store: &dyn LocalStore, message: impl Into<String>) {
    if let Err(e) = record(store, message, Utc::now()) {
        warn!("Activity not persisted: {e}");
    }
}

/// Coarse relative time: "just now", "5m ago", "3h ago", "2d ago".
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - at).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;
    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if minutes > 0 {
        format!("{minutes}m ago")
    } else {
        "just now".to_string()
    }
}
