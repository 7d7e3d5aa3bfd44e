// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! expanse - personal text-expansion manager CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod client;
mod commands;
mod completions;
mod error;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{agent, snippets};
use expanse_core::{Store, StoreError, TerminalConfirm};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "expanse",
    version,
    about = "Manage named text expansions from the command line"
)]
struct Cli {
    /// Path to the expansion file (default: $HOME/.expanserc)
    #[arg(short = 'f', long, global = true, value_name = "PATH")]
    expansion_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // Snippet commands, all one load -> (mutate) -> (save) transaction
    #[command(flatten)]
    Snippet(SnippetCommand),
    /// Talk to a running expansed agent
    Agent(agent::AgentArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[derive(Subcommand)]
enum SnippetCommand {
    /// Add an expansion
    Add(snippets::AddArgs),
    /// Edit an expansion in $EDITOR, creating it if missing
    Edit {
        /// Expansion name
        name: String,
    },
    /// Remove an expansion
    Delete {
        /// Expansion name
        name: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List expansion names
    List,
    /// Show one expansion
    Show {
        /// Expansion name
        name: String,
    },
    /// Print the bodies of the given expansions, skipping unknown names
    Get {
        /// Expansion names
        names: Vec<String>,
    },
    /// Print every expansion on one line, newlines flattened
    Dump,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        // Commands that never touch the store file directly
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
        Commands::Agent(args) => agent::handle(args, cli.expansion_file).await,

        Commands::Snippet(command) => {
            let store = Store::new(cli.expansion_file.unwrap_or_else(Store::default_path));

            match store.ensure(&TerminalConfirm) {
                Ok(()) => {}
                Err(StoreError::Declined) => {
                    anyhow::bail!("aborted: expansion file not created")
                }
                Err(e) => return Err(error::store_unusable(store.path(), e).into()),
            }

            match command {
                SnippetCommand::Add(args) => snippets::add(&store, args),
                SnippetCommand::Edit { name } => {
                    snippets::edit(&store, &name, &expanse_core::CommandEditor::from_env())
                }
                SnippetCommand::Delete { name, yes } => snippets::delete(&store, &name, yes),
                SnippetCommand::List => snippets::list(&store),
                SnippetCommand::Show { name } => snippets::show(&store, &name),
                SnippetCommand::Get { names } => snippets::get(&store, &names),
                SnippetCommand::Dump => snippets::dump(&store),
            }
        }
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("EXPANSE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
