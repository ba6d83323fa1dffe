//! Durable key-value storage for the chosen locale.
//!
//! [`FileStore`] keeps a flat TOML table of string values in
//! `<config dir>/storage.toml`. The config directory resolves in this order:
//!
//! 1. An explicit path passed to [`config_dir_with_override`] / [`FileStore::open`]
//! 2. The `MCGEN_CONFIG_DIR` environment variable (if set and non-empty)
//! 3. The platform config directory (via `dirs`) with `mcgen` appended

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Storage key the active locale is persisted under.
pub const STORAGE_KEY: &str = "language";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "MCGEN_CONFIG_DIR";

const APP_NAME: &str = "mcgen";
const STORAGE_FILE: &str = "storage.toml";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize storage: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Durable string key-value storage.
pub trait LocaleStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process storage; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl LocaleStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Returns the config directory, honoring `MCGEN_CONFIG_DIR`.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory with an optional explicit override, which
/// takes priority over the environment and platform default.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Storage backed by `storage.toml` in the config directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store in `dir`, or in the resolved config directory when `None`.
    ///
    /// Nothing is touched on disk until the first [`LocaleStore::set`].
    pub fn open(dir: Option<PathBuf>) -> Result<Self, StoreError> {
        let dir = config_dir_with_override(dir).ok_or(StoreError::NoConfigDir)?;
        Ok(Self::at_path(dir.join(STORAGE_FILE)))
    }

    /// Use an exact file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(toml::Table::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match content.parse::<toml::Table>() {
            Ok(table) => Ok(table),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Unreadable storage file, starting from empty storage"
                );
                Ok(toml::Table::new())
            }
        }
    }
}

impl LocaleStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let table = self.read_table()?;
        Ok(table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(&table)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), key, value, "FileStore::set");
        Ok(())
    }
}
