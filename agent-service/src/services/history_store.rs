//! File-backed interaction history.
//!
//! The whole history lives in one JSON array on disk. Loads read the file in
//! full and saves replace it in full. Saves go through a sibling temporary
//! file that is renamed over the target, and an `RwLock` keeps a load from
//! interleaving with a save in this process.

use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

pub struct HistoryStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored history. A missing file is an empty history.
    pub async fn load(&self) -> Result<Value, HistoryError> {
        let _guard = self.lock.read().await;

        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Value::Array(Vec::new())),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Replace the stored history with `entries`.
    pub async fn save(&self, entries: &[Value]) -> Result<(), HistoryError> {
        let contents = serde_json::to_vec_pretty(entries)?;

        let _guard = self.lock.write().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &contents).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "History saved"
        );

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
