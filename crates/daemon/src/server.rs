// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Socket server and connection handling.

use expanse_core::{Confirm, StoreError};
use tokio::net::UnixStream;
use tracing::{debug, error};

use crate::lifecycle::DaemonState;
use crate::protocol::{self, DumpEntry, Request, Response, DEFAULT_TIMEOUT, PROTOCOL_VERSION};

/// The agent cannot prompt; overwrite decisions arrive on the request.
struct Refuse;

impl Confirm for Refuse {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

/// Handle a single client connection: one request, one response.
pub async fn handle_connection(
    daemon: &mut DaemonState,
    stream: UnixStream,
) -> Result<(), ServerError> {
    let (mut reader, mut writer) = stream.into_split();

    let request = match protocol::read_request(&mut reader, DEFAULT_TIMEOUT).await {
        Ok(req) => req,
        Err(protocol::ProtocolError::Timeout) => {
            error!("request read timeout");
            return Err(ServerError::Timeout);
        }
        Err(protocol::ProtocolError::ConnectionClosed) => {
            debug!("client disconnected before sending request");
            return Ok(());
        }
        Err(e) => {
            error!("failed to read request: {}", e);
            return Err(ServerError::Protocol(e));
        }
    };

    debug!("received request: {:?}", request);

    let response = handle_request(daemon, request);

    debug!("sending response: {:?}", response);

    protocol::write_response(&mut writer, &response, DEFAULT_TIMEOUT)
        .await
        .map_err(ServerError::Protocol)?;

    Ok(())
}

/// Handle a single request and return a response.
///
/// Mutating requests persist the full record before reporting success.
fn handle_request(daemon: &mut DaemonState, request: Request) -> Response {
    match request {
        Request::Ping => Response::Pong,

        Request::Hello { version: _ } => Response::Hello {
            version: PROTOCOL_VERSION.to_string(),
        },

        Request::Status => Response::Status {
            uptime_secs: daemon.start_time.elapsed().as_secs(),
            expansions: daemon.record.len(),
        },

        Request::List => Response::Names {
            names: daemon.record.names().into_iter().cloned().collect(),
        },

        Request::Get { name } => Response::Body {
            body: daemon.record.get(&name).map(str::to_string),
        },

        Request::Upsert {
            name,
            body,
            overwrite,
        } => {
            let applied = if overwrite {
                daemon.record.upsert(&name, body);
                Ok(())
            } else {
                daemon.record.upsert_guarded(&name, body, &Refuse)
            };

            match applied {
                Ok(()) => persist(daemon),
                Err(StoreError::Declined) => Response::Error {
                    message: format!("expansion '{}' already exists", name),
                },
                Err(e) => Response::Error {
                    message: e.to_string(),
                },
            }
        }

        Request::Remove { name } => match daemon.record.remove(&name) {
            Ok(()) => persist(daemon),
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        },

        Request::Dump => Response::Entries {
            entries: daemon
                .record
                .dump()
                .into_iter()
                .map(|(name, body)| DumpEntry { name, body })
                .collect(),
        },

        Request::Shutdown => {
            daemon.shutdown_requested = true;
            Response::ShuttingDown
        }
    }
}

fn persist(daemon: &DaemonState) -> Response {
    match daemon.persist() {
        Ok(()) => Response::Ok,
        Err(e) => Response::Error {
            message: e.to_string(),
        },
    }
}

/// Server errors
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("protocol error: {0}")]
    Protocol(#[from] protocol::ProtocolError),

    #[error("request timeout")]
    Timeout,
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
