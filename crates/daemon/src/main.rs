// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! expanse agent (expansed)
//!
//! Background process serving expansion-store operations over a unix socket.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::path::PathBuf;

use expanse_daemon::lifecycle::{self, Config, DaemonState, LifecycleError};
use expanse_daemon::server;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};

/// Startup marker prefix written to the log before anything else.
/// Full format: "--- expansed: starting (pid: 12345) ---"
pub const STARTUP_MARKER_PREFIX: &str = "--- expansed: starting (pid: ";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional positional argument: path to the expansion file
    let store_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::resolve(store_path)?;

    // The marker goes in before tracing takes over the file, so a reader
    // tailing the log can find where this startup attempt begins
    write_startup_marker(&config)?;
    let log_guard = setup_logging(&config)?;

    info!("starting expansed for store: {}", config.store_path.display());

    let daemon = match lifecycle::startup(&config) {
        Ok(d) => d,
        Err(e) => {
            // tracing is non-blocking and may not flush before exit;
            // record the failure synchronously as well
            write_startup_error(&config, &e);
            error!("failed to start agent: {}", e);
            drop(log_guard);
            return Err(e.into());
        }
    };

    info!("agent ready, listening on {}", config.socket_path.display());

    // Tell a parent process waiting on startup that the socket is bound
    println!("READY");

    serve(daemon).await?;

    info!("agent stopped");
    Ok(())
}

/// Event loop: accept connections one at a time, stop on a signal or when
/// a client asked for shutdown.
async fn serve(mut daemon: DaemonState) -> Result<(), LifecycleError> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    loop {
        tokio::select! {
            result = daemon.listener.accept() => {
                match result {
                    Ok((stream, _)) => {
                        if let Err(e) = server::handle_connection(&mut daemon, stream).await {
                            error!("error handling connection: {}", e);
                        }
                    }
                    Err(e) => error!("error accepting connection: {}", e),
                }
                if daemon.shutdown_requested {
                    info!("shutdown requested over the socket");
                    break;
                }
            }
            _ = sigterm.recv() => {
                info!("received SIGTERM, shutting down");
                break;
            }
            _ = sigint.recv() => {
                info!("received SIGINT, shutting down");
                break;
            }
        }
    }

    daemon.shutdown()
}

/// Append the startup marker to the log file.
fn write_startup_marker(config: &Config) -> Result<(), LifecycleError> {
    use std::io::Write;

    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    writeln!(file, "{}{}) ---", STARTUP_MARKER_PREFIX, std::process::id())?;

    Ok(())
}

/// Record a startup failure synchronously so it is visible in the log even
/// when the process exits immediately.
fn write_startup_error(config: &Config, error: &LifecycleError) {
    use std::io::Write;

    let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
    else {
        return;
    };
    let _ = writeln!(file, "ERROR failed to start agent: {}", error);
}

/// Non-blocking file logging, filtered by RUST_LOG (default info).
fn setup_logging(
    config: &Config,
) -> Result<tracing_appender::non_blocking::WorkerGuard, LifecycleError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        config.log_path.parent().ok_or(LifecycleError::NoStateDir)?,
        config
            .log_path
            .file_name()
            .ok_or(LifecycleError::NoStateDir)?,
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    Ok(guard)
}
