// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! expanse-core: Core library for the expanse text-expansion manager
//!
//! This crate provides:
//! - The persisted expansion record and its snippet operations
//! - The store: path resolution, bootstrap/validation, load, save
//! - Capability traits for interactive prompts and external editors,
//!   with real and fake implementations

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod record;
pub mod store;

// Re-exports
pub use adapters::{
    AlwaysYes, CommandEditor, Confirm, Editor, FakeConfirm, FakeEditor, TerminalConfirm,
};
pub use record::{Expansions, NEWLINE_MARK};
pub use store::{Store, StoreError};
