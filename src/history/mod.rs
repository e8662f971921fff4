pub mod entry;
pub mod store;

pub use entry::{HistoryEntry, HistoryLimit};
pub use store::{HistoryError, HistoryStore, DEFAULT_STORAGE_KEY};
