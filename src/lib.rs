pub mod clock;
pub mod config;
pub mod history;
pub mod logging;
pub mod mood;
pub mod scanner;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ScannerConfig;
pub use history::{HistoryEntry, HistoryError, HistoryLimit, HistoryStore};
pub use mood::{
    ClassificationResult, Classifier, FixedSelector, LexiconKind, MatchPolicy, MoodCategory,
    QuoteSelector, RandomSelector,
};
pub use scanner::{MoodScanner, ScanOutcome};
pub use storage::{FileKvStore, KvStore, MemoryKvStore, StorageError};
