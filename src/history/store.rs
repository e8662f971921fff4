//! Scan history persisted as a single JSON blob, newest first.

use super::entry::{HistoryEntry, HistoryLimit};
use crate::mood::ClassificationResult;
use crate::storage::{KvStore, StorageError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const DEFAULT_STORAGE_KEY: &str = "moodscan_history";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Bounded, newest-first log of scans over an injected [`KvStore`].
pub struct HistoryStore {
    store: Arc<dyn KvStore>,
    key: String,
    limit: HistoryLimit,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
            limit: HistoryLimit::default(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// A zero bound is raised to one (see [`HistoryLimit::bounded`]).
    pub fn with_limit(mut self, limit: HistoryLimit) -> Self {
        if limit != limit.normalized() {
            warn!(key = %self.key, "History limit of zero raised to one");
        }
        self.limit = limit.normalized();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn limit(&self) -> HistoryLimit {
        self.limit
    }

    /// Record `result` as the newest entry and return what was stored.
    ///
    /// A corrupt blob is replaced. A store that cannot be read is left
    /// untouched and the read error is returned.
    pub fn append(&self, result: &ClassificationResult) -> Result<HistoryEntry, HistoryError> {
        let mut entries = match self.store.get(&self.key)? {
            Some(blob) => self.decode(&blob),
            None => Vec::new(),
        };

        let entry = HistoryEntry::from_result(Self::next_id(result.timestamp), result);
        entries.insert(0, entry.clone());
        self.limit.apply(&mut entries);

        let blob = serde_json::to_vec(&entries)?;
        self.store.set(&self.key, &blob)?;

        debug!(id = %entry.id, mood = %entry.mood, total = entries.len(), "Saved scan to history");
        Ok(entry)
    }

    /// All retained entries, newest first. Never fails: unreadable or
    /// corrupt storage yields an empty list.
    pub fn list(&self) -> Vec<HistoryEntry> {
        let mut entries = match self.store.get(&self.key) {
            Ok(Some(blob)) => self.decode(&blob),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read scan history");
                Vec::new()
            }
        };
        self.limit.apply(&mut entries);
        entries
    }

    pub fn latest(&self) -> Option<HistoryEntry> {
        self.list().into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry. Clearing an empty history succeeds.
    pub fn clear(&self) -> Result<(), HistoryError> {
        self.store.delete(&self.key)?;
        info!(key = %self.key, "Cleared scan history");
        Ok(())
    }

    fn decode(&self, blob: &[u8]) -> Vec<HistoryEntry> {
        match serde_json::from_slice::<Vec<HistoryEntry>>(blob) {
            Ok(mut entries) => {
                for (position, entry) in entries.iter_mut().enumerate() {
                    entry.fill_missing(position);
                }
                entries
            }
            Err(e) => {
                warn!(
                    key = %self.key,
                    bytes = blob.len(),
                    error = %e,
                    "Discarding unreadable scan history"
                );
                Vec::new()
            }
        }
    }

    fn next_id(timestamp: i64) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!("scan_{}_{}", timestamp, &suffix[..9])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodCategory;
    use crate::storage::{FileKvStore, MemoryKvStore, MockStore};
    use std::collections::HashSet;

    fn result_at(timestamp: i64, mood: MoodCategory) -> ClassificationResult {
        ClassificationResult {
            mood,
            label: format!("{mood}"),
            quote: format!("quote {timestamp}"),
            score: Some(50),
            keywords: vec![],
            color: "text-green-400".into(),
            border_color: "rgba(74, 222, 128, 0.8)".into(),
            emoji: "😌".into(),
            timestamp,
        }
    }

    fn memory_history() -> (Arc<MemoryKvStore>, HistoryStore) {
        let kv = Arc::new(MemoryKvStore::new());
        let history = HistoryStore::new(kv.clone());
        (kv, history)
    }

    #[test]
    fn empty_store_lists_nothing() {
        let (_kv, history) = memory_history();
        assert!(history.list().is_empty());
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn list_is_reverse_append_order() {
        let (_kv, history) = memory_history();
        for ts in 1..=3 {
            history.append(&result_at(ts, MoodCategory::Happy)).unwrap();
        }
        let stamps: Vec<i64> = history.list().iter().map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![3, 2, 1]);
        assert_eq!(history.latest().unwrap().timestamp, 3);
    }

    #[test]
    fn bounded_store_keeps_the_twenty_most_recent() {
        let (_kv, history) = memory_history();
        for ts in 1..=25 {
            history.append(&result_at(ts, MoodCategory::Sad)).unwrap();
        }
        let entries = history.list();
        assert_eq!(entries.len(), 20);
        assert_eq!(entries.first().unwrap().timestamp, 25);
        assert_eq!(entries.last().unwrap().timestamp, 6);
    }

    #[test]
    fn unbounded_store_keeps_everything() {
        let (_kv, history) = memory_history();
        let history = history.with_limit(HistoryLimit::Unbounded);
        for ts in 1..=30 {
            history.append(&result_at(ts, MoodCategory::Chill)).unwrap();
        }
        assert_eq!(history.len(), 30);
    }

    #[test]
    fn list_applies_bound_to_oversized_blob() {
        let (kv, history) = memory_history();
        let history = history.with_limit(HistoryLimit::Bounded(3));
        let big: Vec<HistoryEntry> = (0..10)
            .map(|i| HistoryEntry::from_result(format!("id{i}"), &result_at(i, MoodCategory::Happy)))
            .collect();
        kv.set(DEFAULT_STORAGE_KEY, &serde_json::to_vec(&big).unwrap())
            .unwrap();
        assert_eq!(history.list().len(), 3);
    }

    #[test]
    fn entry_copies_result_fields_and_gets_unique_id() {
        let (_kv, history) = memory_history();
        let result = result_at(42, MoodCategory::Angry);
        let a = history.append(&result).unwrap();
        let b = history.append(&result).unwrap();

        assert_eq!(a.mood, MoodCategory::Angry);
        assert_eq!(a.quote, "quote 42");
        assert_eq!(a.timestamp, 42);
        assert_eq!(a.border_color, "rgba(74, 222, 128, 0.8)");
        assert!(a.id.starts_with("scan_42_"));
        assert_ne!(a.id, b.id);

        let ids: HashSet<_> = history.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn clear_then_list_is_empty_and_idempotent() {
        let (_kv, history) = memory_history();
        history.append(&result_at(1, MoodCategory::Happy)).unwrap();
        history.clear().unwrap();
        assert!(history.list().is_empty());
        history.clear().unwrap();
    }

    #[test]
    fn corrupt_blob_lists_empty_and_next_append_recovers() {
        let (kv, history) = memory_history();
        kv.set(DEFAULT_STORAGE_KEY, b"[{\"id\": \"trunc").unwrap();
        assert!(history.list().is_empty());

        history.append(&result_at(7, MoodCategory::Happy)).unwrap();
        let entries = history.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp, 7);
    }

    #[test]
    fn keys_are_isolated() {
        let kv = Arc::new(MemoryKvStore::new());
        let a = HistoryStore::new(kv.clone()).with_key("a");
        let b = HistoryStore::new(kv.clone()).with_key("b");
        a.append(&result_at(1, MoodCategory::Happy)).unwrap();
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn similar_keys_stay_apart_on_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let kv = Arc::new(FileKvStore::new(tmp.path()));
        let dotted = HistoryStore::new(kv.clone()).with_key("moodscan.history");
        let underscored = HistoryStore::new(kv).with_key("moodscan_history");

        dotted.append(&result_at(1, MoodCategory::Happy)).unwrap();
        assert_eq!(dotted.len(), 1);
        assert!(underscored.is_empty());
    }

    #[test]
    fn blobs_from_older_pages_load_and_survive_append() {
        let (kv, history) = memory_history();
        let old = r#"[
            {"id":"scan_20_abc123xyz","mood":"Happy","quote":"Keep shining!",
             "timestamp":20,"color":"text-yellow-400",
             "borderColor":"rgba(250, 204, 21, 0.8)"},
            {"mood":"Excited","emoji":"🤩","color":"text-orange-500",
             "quote":"Hãy tận hưởng sự hào hứng này.","timestamp":10}
        ]"#;
        kv.set(DEFAULT_STORAGE_KEY, old.as_bytes()).unwrap();

        let entries = history.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].mood, MoodCategory::Happy);
        assert_eq!(entries[0].label, "Happy");
        assert_eq!(entries[1].mood, MoodCategory::Energized);
        assert_eq!(entries[1].label, "Excited");
        assert!(!entries[1].id.is_empty());

        history.append(&result_at(30, MoodCategory::Sad)).unwrap();
        let stamps: Vec<i64> = history.list().iter().map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![30, 20, 10]);
        assert_eq!(history.list()[1].id, "scan_20_abc123xyz");
    }

    #[test]
    fn zero_limit_still_keeps_the_latest_scan() {
        let (_kv, history) = memory_history();
        let history = history.with_limit(HistoryLimit::Bounded(0));
        assert_eq!(history.limit(), HistoryLimit::Bounded(1));

        let first = history.append(&result_at(1, MoodCategory::Happy)).unwrap();
        assert_eq!(history.latest(), Some(first));
        let second = history.append(&result_at(2, MoodCategory::Sad)).unwrap();
        assert_eq!(history.list(), vec![second]);
    }

    #[test]
    fn write_failure_is_reported() {
        let mut mock = MockStore::new();
        mock.expect_get().returning(|_| Ok(None));
        mock.expect_set()
            .returning(|_, _| Err(StorageError::Unavailable("disk full".into())));
        let history = HistoryStore::new(Arc::new(mock));

        let err = history
            .append(&result_at(1, MoodCategory::Happy))
            .unwrap_err();
        assert!(matches!(err, HistoryError::Storage(StorageError::Unavailable(_))));
    }

    #[test]
    fn unreadable_store_is_not_overwritten_on_append() {
        let mut mock = MockStore::new();
        mock.expect_get()
            .returning(|_| Err(StorageError::Unavailable("locked".into())));
        mock.expect_set().never();
        let history = HistoryStore::new(Arc::new(mock));

        assert!(history.append(&result_at(1, MoodCategory::Happy)).is_err());
    }

    #[test]
    fn read_failure_lists_empty() {
        let mut mock = MockStore::new();
        mock.expect_get()
            .returning(|_| Err(StorageError::Unavailable("locked".into())));
        let history = HistoryStore::new(Arc::new(mock));

        assert!(history.list().is_empty());
    }

    #[test]
    fn clear_failure_is_reported() {
        let mut mock = MockStore::new();
        mock.expect_delete()
            .returning(|_| Err(StorageError::Unavailable("gone".into())));
        let history = HistoryStore::new(Arc::new(mock));

        assert!(history.clear().is_err());
    }
}
