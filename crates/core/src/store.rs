// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed expansion store: path resolution, bootstrap, load, save.
//!
//! Every command invocation is one load -> (mutate) -> (save) transaction.
//! The store holds no state beyond its path; concurrent external writers
//! get last-writer-wins semantics.

use crate::adapters::Confirm;
use crate::record::Expansions;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// File name of the expansion store inside the home directory.
pub const STORE_FILE_NAME: &str = ".expanserc";

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid expansion file format: {}", path.display())]
    InvalidFormat { path: PathBuf },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no such expansion: {name}")]
    NotFound { name: String },
    #[error("aborted")]
    Declined,
}

/// File-backed expansion store.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store handle for the given path. No filesystem access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Canonical store location: `$HOME/.expanserc`, falling back to the
    /// filesystem root when `HOME` is unset. Reads the environment on each
    /// call so tests can substitute the home directory.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/".to_string());
        PathBuf::from(home).join(STORE_FILE_NAME)
    }

    /// Path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the store file exists and is well-formed.
    ///
    /// An existing file is validated without being touched. A missing file is
    /// created with the canonical empty document, but only after `confirm`
    /// agrees; a declined confirmation creates nothing.
    pub fn ensure(&self, confirm: &dyn Confirm) -> Result<(), StoreError> {
        if self.path.exists() {
            let text = fs::read_to_string(&self.path)?;
            return match serde_json::from_str::<Expansions>(&text) {
                Ok(_) => Ok(()),
                Err(e) => {
                    debug!(path = %self.path.display(), error = %e, "store file failed validation");
                    Err(StoreError::InvalidFormat {
                        path: self.path.clone(),
                    })
                }
            };
        }

        if !confirm.confirm("Expansion file does not exist. Create?") {
            return Err(StoreError::Declined);
        }
        self.save(&Expansions::default())
    }

    /// Load the record. Total: a missing, unreadable, or malformed file
    /// degrades to the empty record. Callers that need strict validation run
    /// [`Store::ensure`] first.
    pub fn load(&self) -> Expansions {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "store file unreadable, loading empty record");
                return Expansions::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(record) => record,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store file malformed, loading empty record");
                Expansions::default()
            }
        }
    }

    /// Persist the full record, replacing the file contents.
    ///
    /// Writes to a sibling temp file and renames it into place, so a failed
    /// write never leaves a truncated file that still parses.
    pub fn save(&self, record: &Expansions) -> Result<(), StoreError> {
        let json = serde_json::to_string(record).map_err(std::io::Error::other)?;

        let tmp = self.temp_path();
        fs::write(&tmp, &json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| STORE_FILE_NAME.to_string());
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        parent.join(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
