// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent commands: query or stop a running expansed.

use crate::client::AgentClient;
use anyhow::Result;
use std::path::PathBuf;

#[derive(clap::Args)]
pub struct AgentArgs {
    #[command(subcommand)]
    pub command: AgentCommand,
}

#[derive(clap::Subcommand)]
pub enum AgentCommand {
    /// Show agent status
    Status,
    /// Ask the agent to shut down
    Stop,
    /// List expansion names through the agent
    List,
}

pub async fn handle(args: AgentArgs, store_path: Option<PathBuf>) -> Result<()> {
    let client = AgentClient::connect(store_path)?;

    match args.command {
        AgentCommand::Status => {
            let (uptime_secs, expansions) = client.status().await?;
            println!("Agent running: {} expansions, up {}s", expansions, uptime_secs);
        }
        AgentCommand::Stop => {
            client.shutdown().await?;
            println!("Agent stopping");
        }
        AgentCommand::List => {
            for name in client.list().await? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
