use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::progress::aggregate::{self, CompletionView, PhaseProgress, Progress, ProgressStats};
use crate::progress::key::ProgressKey;
use crate::roadmap::{Catalog, LookupError, RoadmapId};
use crate::storage::{
    read_json, write_json, LocalStore, StorageError, LEGACY_PROGRESS_KEY, PROGRESS_KEY,
    PROGRESS_VERSION_KEY,
};

/// Current layout version of the persisted progress map.
pub const STORE_VERSION: u32 = 1;

/// Outcome of writing the ledger to the local store after a mutation.
/// A failed flush never undoes the mutation.
#[derive(Debug)]
#[must_use]
pub enum Flush {
    Saved,
    Failed(StorageError),
}

impl Flush {
    pub fn is_saved(&self) -> bool {
        matches!(self, Flush::Saved)
    }
}

/// Result of a toggle: the flag's new value and how the write went.
#[derive(Debug)]
#[must_use]
pub struct Toggled {
    pub done: bool,
    pub flush: Flush,
}

/// Completion flags for every roadmap, keyed by [`ProgressKey`].
///
/// Absent entries read as incomplete. Every mutation writes the whole map to
/// the local store before returning; a failed write is logged and reported
/// but the in-memory map stays authoritative for the rest of the session.
pub struct ProgressLedger {
    catalog: Arc<Catalog>,
    store: Arc<dyn LocalStore>,
    entries: BTreeMap<ProgressKey, bool>,
}

impl ProgressLedger {
    /// An empty ledger that has not read the store.
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn LocalStore>) -> Self {
        Self {
            catalog,
            store,
            entries: BTreeMap::new(),
        }
    }

    /// Loads the ledger from the store. Never fails: unreadable or corrupt
    /// data yields an empty ledger.
    pub fn load(catalog: Arc<Catalog>, store: Arc<dyn LocalStore>) -> Self {
        let mut ledger = Self::new(catalog, store);
        match ledger.read_stored() {
            Ok(raw) => ledger.entries = decode_entries(raw),
            Err(e) => warn!("Could not read stored progress, starting empty: {e}"),
        }
        info!("Loaded progress ledger ({} entries)", ledger.entries.len());
        ledger
    }

    pub fn is_node_complete(
        &self,
        roadmap: &str,
        phase: usize,
        node: usize,
    ) -> Result<bool, LookupError> {
        let id = &self.catalog.roadmap(roadmap)?.id;
        self.catalog.node(roadmap, phase, node)?;
        Ok(self.flag(&ProgressKey::node(id, phase, node)))
    }

    pub fn is_sub_complete(
        &self,
        roadmap: &str,
        phase: usize,
        node: usize,
        sub: usize,
    ) -> Result<bool, LookupError> {
        let id = &self.catalog.roadmap(roadmap)?.id;
        self.catalog.sub(roadmap, phase, node, sub)?;
        Ok(self.flag(&ProgressKey::sub(id, phase, node, sub)))
    }

    /// Flips a node and sets every one of its sub-items to the node's new value.
    pub fn toggle_node(
        &mut self,
        roadmap: &str,
        phase: usize,
        node: usize,
    ) -> Result<Toggled, LookupError> {
        let id = self.catalog.roadmap(roadmap)?.id.clone();
        let sub_count = self.catalog.node(roadmap, phase, node)?.subs.len();

        let key = ProgressKey::node(&id, phase, node);
        let done = !self.flag(&key);
        self.entries.insert(key, done);
        for sub in 0..sub_count {
            self.entries
                .insert(ProgressKey::sub(&id, phase, node, sub), done);
        }

        debug!("Toggled {id}|{phase}|{node} -> {done} ({sub_count} sub-items)");
        Ok(Toggled {
            done,
            flush: self.flush(),
        })
    }

    /// Flips one sub-item. The node flag and sibling sub-items are untouched.
    pub fn toggle_sub(
        &mut self,
        roadmap: &str,
        phase: usize,
        node: usize,
        sub: usize,
    ) -> Result<Toggled, LookupError> {
        let id = self.catalog.roadmap(roadmap)?.id.clone();
        self.catalog.sub(roadmap, phase, node, sub)?;

        let key = ProgressKey::sub(&id, phase, node, sub);
        let done = !self.flag(&key);
        self.entries.insert(key, done);

        debug!("Toggled {id}|{phase}|{node}|{sub} -> {done}");
        Ok(Toggled {
            done,
            flush: self.flush(),
        })
    }

    /// Removes every node- and sub-level entry of one roadmap.
    pub fn reset_roadmap(&mut self, roadmap: &str) -> Result<Flush, LookupError> {
        let id = self.catalog.roadmap(roadmap)?.id.clone();
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.belongs_to(&id));
        info!(
            "Reset progress for '{id}' ({} entries removed)",
            before - self.entries.len()
        );
        Ok(self.flush())
    }

    pub fn reset_all(&mut self) -> Flush {
        self.entries.clear();
        info!("Reset all progress");
        self.flush()
    }

    pub fn roadmap_progress(&self, roadmap: &str) -> Result<Progress, LookupError> {
        aggregate::roadmap_progress(&self.catalog, self, roadmap)
    }

    pub fn global_progress(&self) -> Progress {
        aggregate::global_progress(&self.catalog, self)
    }

    pub fn phase_progress(&self, roadmap: &str, phase: usize) -> Result<PhaseProgress, LookupError> {
        aggregate::phase_progress(&self.catalog, self, roadmap, phase)
    }

    pub fn stats(&self) -> ProgressStats {
        aggregate::progress_stats(&self.catalog, self)
    }

    fn flag(&self, key: &ProgressKey) -> bool {
        self.entries.get(key).copied().unwrap_or(false)
    }

    fn snapshot(&self) -> BTreeMap<String, bool> {
        self.entries
            .iter()
            .map(|(key, done)| (key.encode(), *done))
            .collect()
    }

    fn flush(&self) -> Flush {
        match write_json(self.store.as_ref(), PROGRESS_KEY, &self.snapshot()) {
            Ok(()) => Flush::Saved,
            Err(e) => {
                warn!("Progress not persisted, keeping in-memory state: {e}");
                Flush::Failed(e)
            }
        }
    }

    /// Reads the raw stored map, migrating the pre-versioning layout first.
    fn read_stored(&self) -> Result<BTreeMap<String, bool>, StorageError> {
        let store = self.store.as_ref();
        match store.get(PROGRESS_VERSION_KEY)? {
            Some(version) => {
                let newer = version.trim().parse::<u32>().map_or(true, |v| v > STORE_VERSION);
                if newer {
                    warn!(
                        "Stored progress has version '{version}', newer than {STORE_VERSION}; loading what can be read"
                    );
                }
                Ok(read_json(store, PROGRESS_KEY)?.unwrap_or_default())
            }
            None => {
                let current: Option<BTreeMap<String, bool>> = read_json(store, PROGRESS_KEY)?;
                let raw = match current {
                    Some(current) => current,
                    None => read_json(store, LEGACY_PROGRESS_KEY)?.unwrap_or_default(),
                };
                self.finish_migration(&raw);
                Ok(raw)
            }
        }
    }

    fn finish_migration(&self, raw: &BTreeMap<String, bool>) {
        let store = self.store.as_ref();
        let result = write_json(store, PROGRESS_KEY, raw)
            .and_then(|()| store.set(PROGRESS_VERSION_KEY, &STORE_VERSION.to_string()))
            .and_then(|()| store.remove(LEGACY_PROGRESS_KEY));
        match result {
            Ok(()) => info!("Stamped progress store as version {STORE_VERSION} ({} entries)", raw.len()),
            Err(e) => warn!("Could not stamp progress store version: {e}"),
        }
    }
}

impl CompletionView for ProgressLedger {
    fn node_done(&self, roadmap: &RoadmapId, phase: usize, node: usize) -> bool {
        self.flag(&ProgressKey::node(roadmap, phase, node))
    }
}

fn decode_entries(raw: BTreeMap<String, bool>) -> BTreeMap<ProgressKey, bool> {
    raw.into_iter()
        .filter_map(|(key, done)| match key.parse::<ProgressKey>() {
            Ok(key) => Some((key, done)),
            Err(e) => {
                warn!("Skipping stored progress entry: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::catalog::tests::sample_roadmap;
    use crate::storage::MemoryStore;

    fn setup() -> (Arc<Catalog>, Arc<MemoryStore>, ProgressLedger) {
        let catalog = Arc::new(
            Catalog::new(vec![sample_roadmap("a", &[3, 4]), sample_roadmap("b", &[2])]).unwrap(),
        );
        let store = Arc::new(MemoryStore::new());
        let ledger = ProgressLedger::load(catalog.clone(), store.clone());
        (catalog, store, ledger)
    }

    #[test]
    fn test_absent_entries_read_incomplete() {
        let (_, _, ledger) = setup();
        assert!(!ledger.is_node_complete("a", 0, 0).unwrap());
        assert!(!ledger.is_sub_complete("a", 1, 3, 3).unwrap());
    }

    #[test]
    fn test_toggle_node_cascades_to_sub_items() {
        let (catalog, _, mut ledger) = setup();
        let toggled = ledger.toggle_node("a", 1, 2).unwrap();
        assert!(toggled.done);
        assert!(toggled.flush.is_saved());
        assert!(ledger.is_node_complete("a", 1, 2).unwrap());
        for sub in 0..catalog.node("a", 1, 2).unwrap().subs.len() {
            assert!(ledger.is_sub_complete("a", 1, 2, sub).unwrap());
        }

        let toggled = ledger.toggle_node("a", 1, 2).unwrap();
        assert!(!toggled.done);
        for sub in 0..3 {
            assert!(!ledger.is_sub_complete("a", 1, 2, sub).unwrap());
        }
    }

    #[test]
    fn test_toggle_node_overrides_individually_set_subs() {
        let (_, _, mut ledger) = setup();
        let _ = ledger.toggle_sub("a", 0, 2, 1).unwrap();
        let _ = ledger.toggle_node("a", 0, 2).unwrap();
        let _ = ledger.toggle_node("a", 0, 2).unwrap();
        assert!(!ledger.is_sub_complete("a", 0, 2, 1).unwrap());
    }

    #[test]
    fn test_toggle_sub_does_not_touch_node_or_siblings() {
        let (_, _, mut ledger) = setup();
        let toggled = ledger.toggle_sub("a", 0, 2, 1).unwrap();
        assert!(toggled.done);
        assert!(!ledger.is_node_complete("a", 0, 2).unwrap());
        assert!(!ledger.is_sub_complete("a", 0, 2, 0).unwrap());
        assert!(!ledger.is_sub_complete("a", 0, 2, 2).unwrap());
    }

    #[test]
    fn test_all_subs_complete_does_not_complete_node() {
        let (_, _, mut ledger) = setup();
        for sub in 0..2 {
            let _ = ledger.toggle_sub("a", 0, 1, sub).unwrap();
        }
        assert!(!ledger.is_node_complete("a", 0, 1).unwrap());
        assert_eq!(ledger.roadmap_progress("a").unwrap().done, 0);
    }

    #[test]
    fn test_out_of_range_is_an_error_not_false() {
        let (_, _, mut ledger) = setup();
        assert!(matches!(
            ledger.is_node_complete("a", 0, 3),
            Err(LookupError::NodeOutOfRange { .. })
        ));
        assert!(matches!(
            ledger.toggle_node("nope", 0, 0),
            Err(LookupError::UnknownRoadmap(_))
        ));
        assert!(matches!(
            ledger.toggle_sub("a", 0, 0, 1),
            Err(LookupError::SubOutOfRange { .. })
        ));
        assert!(ledger.reset_roadmap("nope").is_err());
    }

    #[test]
    fn test_reset_roadmap_leaves_others() {
        let (_, _, mut ledger) = setup();
        let _ = ledger.toggle_node("a", 0, 0).unwrap();
        let _ = ledger.toggle_sub("a", 1, 1, 0).unwrap();
        let _ = ledger.toggle_node("b", 0, 1).unwrap();
        let before_b = ledger.roadmap_progress("b").unwrap();

        assert!(ledger.reset_roadmap("a").unwrap().is_saved());
        let a = ledger.roadmap_progress("a").unwrap();
        assert_eq!((a.done, a.total, a.pct), (0, 7, 0));
        assert!(!ledger.is_sub_complete("a", 1, 1, 0).unwrap());
        assert_eq!(ledger.roadmap_progress("b").unwrap(), before_b);
    }

    #[test]
    fn test_reset_all_clears_everything() {
        let (_, _, mut ledger) = setup();
        let _ = ledger.toggle_node("a", 0, 0).unwrap();
        let _ = ledger.toggle_node("b", 0, 0).unwrap();
        assert!(ledger.reset_all().is_saved());
        assert_eq!(ledger.global_progress().done, 0);
    }

    #[test]
    fn test_reload_reproduces_flags() {
        let (catalog, store, mut ledger) = setup();
        let _ = ledger.toggle_node("a", 1, 3).unwrap();
        let _ = ledger.toggle_sub("a", 0, 0, 0).unwrap();
        let _ = ledger.toggle_node("b", 0, 0).unwrap();
        let _ = ledger.toggle_node("b", 0, 0).unwrap();

        let reloaded = ProgressLedger::load(catalog.clone(), store);
        for roadmap in catalog.roadmaps() {
            let id = roadmap.id.as_str();
            for (pi, phase) in roadmap.phases.iter().enumerate() {
                for (ni, node) in phase.nodes.iter().enumerate() {
                    assert_eq!(
                        reloaded.is_node_complete(id, pi, ni).unwrap(),
                        ledger.is_node_complete(id, pi, ni).unwrap()
                    );
                    for si in 0..node.subs.len() {
                        assert_eq!(
                            reloaded.is_sub_complete(id, pi, ni, si).unwrap(),
                            ledger.is_sub_complete(id, pi, ni, si).unwrap()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_persisted_layout_uses_encoded_keys() {
        let (_, store, mut ledger) = setup();
        let _ = ledger.toggle_node("b", 0, 0).unwrap();
        let raw: BTreeMap<String, bool> = read_json(store.as_ref(), PROGRESS_KEY).unwrap().unwrap();
        assert_eq!(raw.get("b|0|0"), Some(&true));
        assert_eq!(raw.get("b|0|0|0"), Some(&true));
        assert_eq!(
            store.get(PROGRESS_VERSION_KEY).unwrap().as_deref(),
            Some("1")
        );
    }

    #[test]
    fn test_storage_failure_keeps_in_memory_state() {
        let catalog = Arc::new(Catalog::new(vec![sample_roadmap("a", &[2])]).unwrap());
        let mut ledger = ProgressLedger::load(catalog, Arc::new(MemoryStore::unavailable()));

        let toggled = ledger.toggle_node("a", 0, 1).unwrap();
        assert!(matches!(toggled.flush, Flush::Failed(StorageError::Unavailable)));
        assert!(ledger.is_node_complete("a", 0, 1).unwrap());
        assert_eq!(ledger.roadmap_progress("a").unwrap().pct, 50);
    }

    #[test]
    fn test_quota_exceeded_is_reported() {
        let catalog = Arc::new(Catalog::new(vec![sample_roadmap("a", &[5])]).unwrap());
        let store = Arc::new(MemoryStore::with_quota(64));
        let mut ledger = ProgressLedger::load(catalog, store);
        let toggled = ledger.toggle_node("a", 0, 4).unwrap();
        assert!(matches!(
            toggled.flush,
            Flush::Failed(StorageError::QuotaExceeded { .. })
        ));
        assert!(ledger.is_sub_complete("a", 0, 4, 4).unwrap());
    }

    #[test]
    fn test_migrates_legacy_key() {
        let catalog = Arc::new(Catalog::new(vec![sample_roadmap("a", &[2])]).unwrap());
        let store = Arc::new(MemoryStore::new());
        store
            .set(LEGACY_PROGRESS_KEY, r#"{"a|0|1":true,"a|0|1|0":true}"#)
            .unwrap();

        let ledger = ProgressLedger::load(catalog, store.clone());
        assert!(ledger.is_node_complete("a", 0, 1).unwrap());
        assert!(ledger.is_sub_complete("a", 0, 1, 0).unwrap());
        assert_eq!(store.get(LEGACY_PROGRESS_KEY).unwrap(), None);
        assert!(store.get(PROGRESS_KEY).unwrap().is_some());
        assert_eq!(
            store.get(PROGRESS_VERSION_KEY).unwrap().as_deref(),
            Some("1")
        );
    }

    #[test]
    fn test_corrupt_store_loads_empty() {
        let catalog = Arc::new(Catalog::new(vec![sample_roadmap("a", &[2])]).unwrap());
        let store = Arc::new(MemoryStore::new());
        store.set(PROGRESS_VERSION_KEY, "1").unwrap();
        store.set(PROGRESS_KEY, "[1, 2").unwrap();
        let ledger = ProgressLedger::load(catalog, store);
        assert_eq!(ledger.global_progress().done, 0);
    }

    #[test]
    fn test_malformed_keys_are_skipped() {
        let catalog = Arc::new(Catalog::new(vec![sample_roadmap("a", &[2])]).unwrap());
        let store = Arc::new(MemoryStore::new());
        store.set(PROGRESS_VERSION_KEY, "1").unwrap();
        store
            .set(PROGRESS_KEY, r#"{"a|0|0":true,"a|zero|1":true,"bad":true}"#)
            .unwrap();
        let ledger = ProgressLedger::load(catalog, store);
        assert!(ledger.is_node_complete("a", 0, 0).unwrap());
        assert!(!ledger.is_node_complete("a", 0, 1).unwrap());
    }

    #[test]
    fn test_progress_follows_toggles() {
        let (_, _, mut ledger) = setup();
        let _ = ledger.toggle_node("a", 0, 0).unwrap();
        let _ = ledger.toggle_node("a", 1, 3).unwrap();
        let progress = ledger.roadmap_progress("a").unwrap();
        assert_eq!((progress.done, progress.total, progress.pct), (2, 7, 29));
        assert_eq!(ledger.phase_progress("a", 1).unwrap().done, 1);
        assert_eq!(ledger.global_progress().total, 9);

        let stats = ledger.stats();
        assert_eq!(stats.total_done, 2);
        assert_eq!(stats.maps_started, 1);
        assert_eq!(stats.best_pct, 29);

        // Sub-items never move the percentage.
        let _ = ledger.toggle_sub("b", 0, 1, 0).unwrap();
        assert_eq!(ledger.roadmap_progress("b").unwrap().pct, 0);
    }
}
