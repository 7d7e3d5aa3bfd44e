// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent lifecycle: configuration, startup, shutdown.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use expanse_core::{AlwaysYes, Expansions, Store, StoreError};
use fs2::FileExt;
use thiserror::Error;
use tokio::net::UnixListener;
use tracing::info;

/// Agent configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the expansion file the agent serves
    pub store_path: PathBuf,
    /// Path to Unix socket
    pub socket_path: PathBuf,
    /// Path to lock/PID file
    pub lock_path: PathBuf,
    /// Path to agent log file
    pub log_path: PathBuf,
}

impl Config {
    /// Resolve paths: the store at its canonical location (or an override),
    /// everything else under the state directory.
    pub fn resolve(store_path: Option<PathBuf>) -> Result<Self, LifecycleError> {
        let state_dir = state_dir()?.join("expanse");

        Ok(Self {
            store_path: store_path.unwrap_or_else(Store::default_path),
            socket_path: state_dir.join("expansed.sock"),
            lock_path: state_dir.join("expansed.pid"),
            log_path: state_dir.join("expansed.log"),
        })
    }
}

/// State directory: `$XDG_STATE_HOME`, falling back to `$HOME/.local/state`.
fn state_dir() -> Result<PathBuf, LifecycleError> {
    if let Ok(dir) = std::env::var("XDG_STATE_HOME") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").map_err(|_| LifecycleError::NoStateDir)?;
    Ok(PathBuf::from(home).join(".local").join("state"))
}

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("could not determine state directory (HOME unset)")]
    NoStateDir,
    #[error("agent already running (lock held: {})", .0.display())]
    AlreadyRunning(PathBuf),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Agent state during operation
pub struct DaemonState {
    /// Configuration
    pub config: Config,
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    #[allow(dead_code)]
    lock_file: File,
    /// Unix socket listener
    pub listener: UnixListener,
    /// The store the agent persists through
    pub store: Store,
    /// In-memory record, loaded once at startup
    pub record: Expansions,
    /// When the agent started
    pub start_time: Instant,
    /// Shutdown requested flag
    pub shutdown_requested: bool,
}

/// Start the agent: take the pid lock, validate the store, bind the socket.
///
/// The agent cannot prompt, so a missing store file is created without
/// confirmation; an invalid one fails startup.
pub fn startup(config: &Config) -> Result<DaemonState, LifecycleError> {
    if let Some(parent) = config.lock_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut lock_file = OpenOptions::new()
        .create(true)
        .write(true)
        .open(&config.lock_path)?;
    lock_file
        .try_lock_exclusive()
        .map_err(|_| LifecycleError::AlreadyRunning(config.lock_path.clone()))?;
    lock_file.set_len(0)?;
    writeln!(lock_file, "{}", std::process::id())?;

    let store = Store::new(&config.store_path);
    store.ensure(&AlwaysYes)?;
    let record = store.load();

    // Stale socket from an unclean shutdown
    if config.socket_path.exists() {
        fs::remove_file(&config.socket_path)?;
    }
    if let Some(parent) = config.socket_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let listener = UnixListener::bind(&config.socket_path)?;

    info!(
        store = %config.store_path.display(),
        expansions = record.len(),
        "agent started"
    );

    Ok(DaemonState {
        config: config.clone(),
        lock_file,
        listener,
        store,
        record,
        start_time: Instant::now(),
        shutdown_requested: false,
    })
}

impl DaemonState {
    /// Persist the in-memory record after a mutation.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.record)
    }

    /// Remove socket and pid files. The lock itself is released on drop.
    pub fn shutdown(&mut self) -> Result<(), LifecycleError> {
        info!("agent shutting down");
        if self.config.socket_path.exists() {
            fs::remove_file(&self.config.socket_path)?;
        }
        if self.config.lock_path.exists() {
            fs::remove_file(&self.config.lock_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
