//! Key-value blob storage consumed by the history store.
//!
//! The store is deliberately dumb: it keeps one opaque byte blob per key and
//! does no validation. Encoding and corruption handling belong to callers.

pub mod file;
pub mod memory;

use thiserror::Error;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store cannot be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Durable get/set/delete of one blob per key.
pub trait KvStore: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the blob under `key` as a whole.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mockall::mock! {
    pub Store {}

    impl KvStore for Store {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
        fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
        fn delete(&self, key: &str) -> Result<(), StorageError>;
    }
}
