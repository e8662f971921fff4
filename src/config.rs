//! Shared config utilities for loading/saving JSON config files,
//! plus the scanner's own configuration.

use crate::history::{HistoryLimit, DEFAULT_STORAGE_KEY};
use crate::mood::{LexiconKind, MatchPolicy};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to create config directory: {0}")]
    CreateDir(#[source] std::io::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}

/// Generic load for any Serde config type with a `Default` implementation.
/// Falls back to `T::default()` if the file is missing or unparsable.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(config) => {
                info!("[{}] Loaded config from {}", label, path.display());
                config
            }
            Err(e) => {
                warn!(
                    "[{}] Failed to parse config {}: {}, using defaults",
                    label,
                    path.display(),
                    e
                );
                T::default()
            }
        },
        Err(_) => {
            info!(
                "[{}] No config file at {}, using defaults",
                label,
                path.display()
            );
            T::default()
        }
    }
}

/// Generic save for any Serde config type.
pub fn save_json_config<T: Serialize>(
    path: &Path,
    config: &T,
    label: &str,
) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(ConfigError::CreateDir)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).map_err(ConfigError::Write)?;
    info!("[{}] Saved config to {}", label, path.display());
    Ok(())
}

/// Write `config` to `path` unless a file is already there. With `force`
/// an existing file is replaced. Returns whether anything was written.
pub fn init_json_config<T: Serialize>(
    path: &Path,
    config: &T,
    force: bool,
    label: &str,
) -> Result<bool, ConfigError> {
    if path.exists() && !force {
        info!("[{}] Keeping existing config at {}", label, path.display());
        return Ok(false);
    }
    save_json_config(path, config, label)?;
    Ok(true)
}

/// Default per-user data directory for the scanner.
pub fn default_data_dir() -> PathBuf {
    dirs_next::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moodscan")
}

/// Default config file inside a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.json")
}

/// Where history blobs live. Kept apart from `config.json` so no storage
/// key can clobber the config.
pub fn history_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("history")
}

// ── Scanner config ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub lexicon: LexiconKind,
    pub policy: MatchPolicy,
    /// Maximum retained scans; `null` keeps everything.
    pub history_limit: Option<usize>,
    pub storage_key: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            lexicon: LexiconKind::Bilingual,
            policy: MatchPolicy::Tally,
            history_limit: Some(HistoryLimit::DEFAULT_MAX),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl ScannerConfig {
    pub fn history_limit(&self) -> HistoryLimit {
        HistoryLimit::from(self.history_limit)
    }
}
