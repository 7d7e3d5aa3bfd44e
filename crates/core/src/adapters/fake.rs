// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake capability implementations for testing

use super::traits::{Confirm, Editor, EditorError};
use std::sync::Mutex;

/// Scripted confirmation that records every prompt it was asked.
#[derive(Debug, Default)]
pub struct FakeConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl FakeConfirm {
    /// Fake that answers yes to everything.
    pub fn yes() -> Self {
        Self {
            answer: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fake that answers no to everything.
    pub fn no() -> Self {
        Self {
            answer: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts asked so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Confirm for FakeConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());
        self.answer
    }
}

/// Scripted editor: returns a fixed body, or cancellation.
#[derive(Debug, Default)]
pub struct FakeEditor {
    result: Option<String>,
    seen: Mutex<Vec<String>>,
}

impl FakeEditor {
    /// Fake that "edits" every text into `body`.
    pub fn returning(body: impl Into<String>) -> Self {
        Self {
            result: Some(body.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Fake that cancels every edit.
    pub fn cancelling() -> Self {
        Self {
            result: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Initial texts passed to the editor, in order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Editor for FakeEditor {
    fn edit(&self, initial: &str) -> Result<Option<String>, EditorError> {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(initial.to_string());
        Ok(self.result.clone())
    }
}
