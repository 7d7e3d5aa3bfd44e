// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire protocol between the CLI and the agent.
//!
//! Messages are JSON documents framed with a 4-byte big-endian length prefix,
//! one request and one response per connection.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Protocol version sent in `Hello` exchanges.
pub const PROTOCOL_VERSION: &str = "1";

/// Default timeout for reading or writing one message.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on a framed message; anything larger is rejected.
const MAX_MESSAGE_SIZE: u32 = 16 * 1024 * 1024;

/// Protocol errors
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("connection closed")]
    ConnectionClosed,
    #[error("timed out")]
    Timeout,
    #[error("message too large: {0} bytes")]
    Oversized(u32),
}

/// Requests the agent accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    Ping,
    Hello { version: String },
    Status,
    List,
    Get { name: String },
    Upsert { name: String, body: String, overwrite: bool },
    Remove { name: String },
    Dump,
    Shutdown,
}

/// One flattened (name, body) pair in a `Dump` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpEntry {
    pub name: String,
    pub body: String,
}

/// Responses the agent produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    Pong,
    Hello { version: String },
    Ok,
    Status { uptime_secs: u64, expansions: usize },
    Names { names: Vec<String> },
    Body { body: Option<String> },
    Entries { entries: Vec<DumpEntry> },
    ShuttingDown,
    Error { message: String },
}

/// Encode a message as raw JSON (no length prefix).
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, ProtocolError> {
    Ok(serde_json::to_vec(value)?)
}

/// Decode a message from raw JSON.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ProtocolError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Write a length-prefixed message.
pub async fn write_message<W: AsyncWrite + Unpin>(
    writer: &mut W,
    data: &[u8],
) -> Result<(), ProtocolError> {
    let len = data.len() as u32;
    writer.write_all(&len.to_be_bytes()).await?;
    writer.write_all(data).await?;
    writer.flush().await?;
    Ok(())
}

/// Read a length-prefixed message.
pub async fn read_message<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Vec<u8>, ProtocolError> {
    let mut len_buf = [0u8; 4];
    if let Err(e) = reader.read_exact(&mut len_buf).await {
        return Err(eof_as_closed(e));
    }

    let len = u32::from_be_bytes(len_buf);
    if len > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::Oversized(len));
    }

    let mut buf = vec![0u8; len as usize];
    reader.read_exact(&mut buf).await.map_err(eof_as_closed)?;
    Ok(buf)
}

fn eof_as_closed(e: std::io::Error) -> ProtocolError {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        ProtocolError::ConnectionClosed
    } else {
        ProtocolError::Io(e)
    }
}

/// Read and decode a request, bounded by `timeout`.
pub async fn read_request<R: AsyncRead + Unpin>(
    reader: &mut R,
    timeout: Duration,
) -> Result<Request, ProtocolError> {
    match tokio::time::timeout(timeout, read_message(reader)).await {
        Ok(Ok(bytes)) => decode(&bytes),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(ProtocolError::Timeout),
    }
}

/// Encode and write a response, bounded by `timeout`.
pub async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &Response,
    timeout: Duration,
) -> Result<(), ProtocolError> {
    let bytes = encode(response)?;
    match tokio::time::timeout(timeout, write_message(writer, &bytes)).await {
        Ok(result) => result,
        Err(_) => Err(ProtocolError::Timeout),
    }
}

/// Encode and write a request, bounded by `timeout`. Client side.
pub async fn write_request<W: AsyncWrite + Unpin>(
    writer: &mut W,
    request: &Request,
    timeout: Duration,
) -> Result<(), ProtocolError> {
    let bytes = encode(request)?;
    match tokio::time::timeout(timeout, write_message(writer, &bytes)).await {
        Ok(result) => result,
        Err(_) => Err(ProtocolError::Timeout),
    }
}

/// Read and decode a response, bounded by `timeout`. Client side.
pub async fn read_response<R: AsyncRead + Unpin>(
    reader: &mut R,
    timeout: Duration,
) -> Result<Response, ProtocolError> {
    match tokio::time::timeout(timeout, read_message(reader)).await {
        Ok(Ok(bytes)) => decode(&bytes),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(ProtocolError::Timeout),
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
