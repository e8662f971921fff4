//! Scan pipeline: classify the text, then record it in history.
//!
//! Persistence is a side channel. A failed write is handed back next to
//! the classification so the caller can still show the result.

use crate::clock::Clock;
use crate::config::ScannerConfig;
use crate::history::{HistoryEntry, HistoryError, HistoryStore};
use crate::mood::{ClassificationResult, Classifier, QuoteSelector};
use crate::storage::KvStore;
use std::sync::Arc;

#[derive(Debug)]
pub struct ScanOutcome {
    pub result: ClassificationResult,
    pub persisted: Result<HistoryEntry, HistoryError>,
}

impl ScanOutcome {
    pub fn is_saved(&self) -> bool {
        self.persisted.is_ok()
    }
}

pub struct MoodScanner {
    classifier: Classifier,
    history: HistoryStore,
}

impl MoodScanner {
    pub fn new(classifier: Classifier, history: HistoryStore) -> Self {
        Self {
            classifier,
            history,
        }
    }

    /// Wire a scanner from config over the given store and clock.
    pub fn from_config(
        config: &ScannerConfig,
        store: Arc<dyn KvStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let classifier = Classifier::new(config.lexicon.lexicon(), config.policy, clock);
        let history = HistoryStore::new(store)
            .with_key(config.storage_key.clone())
            .with_limit(config.history_limit());
        tracing::info!(
            lexicon = classifier.lexicon().name,
            policy = ?classifier.policy(),
            limit = ?history.limit(),
            "Mood scanner ready"
        );
        Self::new(classifier, history)
    }

    pub fn scan<S>(&self, text: &str, selector: &mut S) -> ScanOutcome
    where
        S: QuoteSelector + ?Sized,
    {
        let result = self.classifier.classify(text, selector);
        let persisted = self.history.append(&result);
        if let Err(e) = &persisted {
            tracing::warn!(error = %e, mood = %result.mood, "Scan result not saved to history");
        }
        ScanOutcome { result, persisted }
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.list()
    }

    pub fn clear_history(&self) -> Result<(), HistoryError> {
        self.history.clear()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn history_store(&self) -> &HistoryStore {
        &self.history
    }
}
