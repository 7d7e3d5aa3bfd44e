// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real capability implementations: terminal prompts and `$EDITOR`.

use super::traits::{Confirm, Editor, EditorError};
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::Command;
use tracing::debug;

/// Confirmation prompt on the controlling terminal.
///
/// Writes `"<prompt> [y/N] "` to stderr and reads one line from stdin.
/// Anything other than `y`/`yes` (case-insensitive), including a closed
/// stdin, counts as no.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Confirmation that always answers yes. Drives `--yes` flags and
/// non-interactive contexts like the background agent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysYes;

impl Confirm for AlwaysYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Editor that shells out to an external command on a temp file.
///
/// The command value is split on whitespace: first token is the program,
/// the rest are leading arguments, and the temp file path is appended.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Editor from `$EDITOR`, falling back to `vi`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string()))
    }
}

impl Editor for CommandEditor {
    fn edit(&self, initial: &str) -> Result<Option<String>, EditorError> {
        let path = std::env::temp_dir().join(format!("expanse-edit-{}.txt", uuid::Uuid::new_v4()));
        fs::write(&path, initial)?;

        let mut parts = self.command.split_whitespace();
        let program = parts.next().unwrap_or("vi");
        let status = Command::new(program)
            .args(parts)
            .arg(&path)
            .status()
            .map_err(|source| EditorError::Launch {
                command: self.command.clone(),
                source,
            });

        let status = match status {
            Ok(status) => status,
            Err(e) => {
                let _ = fs::remove_file(&path);
                return Err(e);
            }
        };

        if !status.success() {
            debug!(command = %self.command, "editor exited non-zero, treating as cancelled");
            let _ = fs::remove_file(&path);
            return Ok(None);
        }

        let body = fs::read_to_string(&path);
        let _ = fs::remove_file(&path);
        Ok(Some(body?))
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
