//! Key-value storage for serialized application state
//!
//! Values are opaque strings stored under short keys, mirroring a mobile
//! device store. The file backend keeps one file per key:
//!
//! Example: key "events" is stored at "<root>/events.json"

use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// String-keyed store of string values
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if nothing is stored
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn remove_item(&self, key: &str) -> Result<()>;
}

/// File-backed key-value store
#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the store (create directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Key-value store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Get store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get file path for a key
    fn get_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.get_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(value) => {
                tracing::debug!("Read key {} ({} bytes)", key, value.len());
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.get_path(key)?;

        fs::create_dir_all(&self.root).await?;

        // Write to temp file first (atomic write)
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;

        fs::rename(temp_path, &path).await?;

        tracing::debug!("Wrote key {} ({} bytes)", key, value.len());

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.get_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("Removed key {}", key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory key-value store, shared between clones
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| AppError::Storage("memory store mutex poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items()?.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items()?.remove(key);
        Ok(())
    }
}

/// Keys become file names, so only a conservative character set is allowed
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(AppError::Storage(format!("Invalid storage key: {:?}", key)))
    }
}
