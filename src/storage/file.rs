use super::{KvStore, StorageError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One file per key under a base directory.
///
/// Writes go to a temp file first and are renamed into place, so a reader
/// sees either the old blob or the new one.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    base_dir: PathBuf,
}

impl FileKvStore {
    /// The directory is created lazily on first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `[A-Za-z0-9_-]` is kept as is; every other byte is written as
    /// `%XX`, so distinct keys always land in distinct files.
    fn file_path(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                name.push(char::from(byte));
            } else {
                name.push_str(&format!("%{byte:02X}"));
            }
        }
        self.base_dir.join(format!("{name}.json"))
    }

    fn io_error(context: &'static str, source: io::Error) -> StorageError {
        StorageError::Io { context, source }
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.file_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error("failed to read store file", err)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir)
            .map_err(|err| Self::io_error("failed to create store directory", err))?;

        let path = self.file_path(key);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)
            .map_err(|err| Self::io_error("failed to write store temp file", err))?;
        if let Err(err) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(Self::io_error("failed to move store file into place", err));
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_error("failed to delete store file", err)),
        }
    }
}
