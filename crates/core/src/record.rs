// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The persisted expansion record and the operations on it.
//!
//! An [`Expansions`] value is the full in-memory image of the store file.
//! Mutations happen in memory; persisting them is the store's job.

use crate::adapters::Confirm;
use crate::store::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder glyph substituted for newlines in `dump` output.
pub const NEWLINE_MARK: char = '\u{21b5}';

/// The full contents of an expansion file: snippet name -> snippet body.
///
/// Names are unique by construction. Iteration order is sorted, which keeps
/// `list` and `dump` output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansions {
    pub expansions: BTreeMap<String, String>,
}

impl Expansions {
    /// Insert or replace a snippet. In-memory only; callers persist via the store.
    pub fn upsert(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.expansions.insert(name.into(), body.into());
    }

    /// Insert or replace a snippet, consulting `confirm` first when the name
    /// already exists. A declined confirmation leaves the record untouched.
    pub fn upsert_guarded(
        &mut self,
        name: &str,
        body: impl Into<String>,
        confirm: &dyn Confirm,
    ) -> Result<(), StoreError> {
        if self.expansions.contains_key(name)
            && !confirm.confirm(&format!("Expansion '{}' already exists. Overwrite?", name))
        {
            return Err(StoreError::Declined);
        }
        self.expansions.insert(name.to_string(), body.into());
        Ok(())
    }

    /// Remove a snippet by name.
    pub fn remove(&mut self, name: &str) -> Result<(), StoreError> {
        self.expansions
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    /// Look up a snippet body.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.expansions.get(name).map(String::as_str)
    }

    /// All snippet names, in stored (sorted) order.
    pub fn names(&self) -> Vec<&String> {
        self.expansions.keys().collect()
    }

    /// All (name, body) pairs with bodies flattened to a single line:
    /// every newline is replaced by [`NEWLINE_MARK`], everything else is
    /// preserved in order.
    pub fn dump(&self) -> Vec<(String, String)> {
        self.expansions
            .iter()
            .map(|(name, body)| (name.clone(), body.replace('\n', &NEWLINE_MARK.to_string())))
            .collect()
    }

    /// Number of snippets in the record.
    pub fn len(&self) -> usize {
        self.expansions.len()
    }

    /// True when the record holds no snippets.
    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
