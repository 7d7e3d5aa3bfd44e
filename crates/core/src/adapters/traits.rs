// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability trait definitions for interactive integrations

use thiserror::Error;

/// Yes/no confirmation capability.
///
/// The store consults this before creating a missing file, overwriting an
/// existing snippet, or deleting one. Implementations decide how the question
/// reaches the user.
pub trait Confirm {
    /// Ask the user a yes/no question. `false` aborts the operation.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Errors from editor invocations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("failed to launch editor '{command}': {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// External text-editing capability.
///
/// "Open an editing surface on this text, get back the edited text."
pub trait Editor {
    /// Edit `initial` and return the result, or `None` when the user
    /// cancelled the edit.
    fn edit(&self, initial: &str) -> Result<Option<String>, EditorError>;
}
