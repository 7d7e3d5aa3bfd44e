// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing error display with recovery hints.

use expanse_core::StoreError;
use std::fmt;
use std::path::Path;

/// A command failure enriched with hints on how to recover.
#[derive(Debug)]
pub struct CliError {
    message: String,
    hints: Vec<String>,
    source: StoreError,
}

impl CliError {
    fn new(message: String, source: StoreError) -> Self {
        Self {
            message,
            hints: Vec::new(),
            source,
        }
    }

    fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for hint in &self.hints {
            write!(f, "\n  hint: {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// The expansion file failed validation at startup.
pub fn store_unusable(path: &Path, cause: StoreError) -> CliError {
    let message = format!("could not access expansion file {}", path.display());
    match &cause {
        StoreError::InvalidFormat { .. } => CliError::new(message, cause)
            .hint("the file exists but is not a valid expansion file")
            .hint("fix the JSON by hand, or remove the file and let expanse recreate it"),
        _ => CliError::new(message, cause).hint("check the path and its directory permissions"),
    }
}

/// Saving the record failed after a mutation; nothing was persisted.
pub fn write_failed(path: &Path, cause: StoreError) -> CliError {
    CliError::new(format!("could not write to {}", path.display()), cause)
        .hint("check free disk space and directory permissions")
}
