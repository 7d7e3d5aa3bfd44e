// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability modules for interactive integrations
//!
//! Confirmation prompts and external editors are injected capabilities so the
//! store logic stays testable without simulating a terminal.

pub mod fake;
pub mod real;
pub mod traits;

// Re-export traits
pub use traits::{Confirm, Editor, EditorError};

// Re-export real implementations
pub use real::{AlwaysYes, CommandEditor, TerminalConfirm};

// Re-export fakes
pub use fake::{FakeConfirm, FakeEditor};
