// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent client for CLI commands

use std::path::PathBuf;

use expanse_daemon::protocol::{self, ProtocolError, Request, Response, DEFAULT_TIMEOUT};
use expanse_daemon::{Config, LifecycleError};
use thiserror::Error;
use tokio::net::UnixStream;
use tracing::debug;

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("agent not running (start it with: expansed)")]
    NotRunning,

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("agent error: {0}")]
    Agent(String),

    #[error("unexpected response from agent")]
    UnexpectedResponse,

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

/// Client for a running agent. One request per connection.
pub struct AgentClient {
    socket_path: PathBuf,
}

impl AgentClient {
    /// Connect to a running agent (no auto-start).
    pub fn connect(store_path: Option<PathBuf>) -> Result<Self, ClientError> {
        let config = Config::resolve(store_path)?;

        if !config.socket_path.exists() {
            return Err(ClientError::NotRunning);
        }

        Ok(Self {
            socket_path: config.socket_path,
        })
    }

    async fn request(&self, request: &Request) -> Result<Response, ClientError> {
        let stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|_| ClientError::NotRunning)?;
        let (mut reader, mut writer) = stream.into_split();

        debug!("sending request: {:?}", request);
        protocol::write_request(&mut writer, request, DEFAULT_TIMEOUT).await?;
        let response = protocol::read_response(&mut reader, DEFAULT_TIMEOUT).await?;

        match response {
            Response::Error { message } => Err(ClientError::Agent(message)),
            other => Ok(other),
        }
    }

    /// Agent uptime and expansion count.
    pub async fn status(&self) -> Result<(u64, usize), ClientError> {
        match self.request(&Request::Status).await? {
            Response::Status {
                uptime_secs,
                expansions,
            } => Ok((uptime_secs, expansions)),
            _ => Err(ClientError::UnexpectedResponse),
        }
    }

    /// Expansion names held by the agent.
    pub async fn list(&self) -> Result<Vec<String>, ClientError> {
        match self.request(&Request::List).await? {
            Response::Names { names } => Ok(names),
            _ => Err(ClientError::UnexpectedResponse),
        }
    }

    /// Ask the agent to shut down.
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        match self.request(&Request::Shutdown).await? {
            Response::ShuttingDown => Ok(()),
            _ => Err(ClientError::UnexpectedResponse),
        }
    }
}
