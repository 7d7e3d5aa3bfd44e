// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation.
//!
//! Writes a completion script for the chosen shell to stdout, e.g.
//!
//! ```bash
//! expanse completions bash > ~/.local/share/bash-completion/completions/expanse
//! expanse completions zsh > ~/.zfunc/_expanse
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Generate completions for the full command tree and write them to stdout.
pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "expanse", &mut io::stdout());
}
