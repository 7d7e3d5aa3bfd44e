// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! expanse-daemon: background agent serving store operations over a unix socket.
//!
//! The binary (`expansed`) owns the event loop; this library exposes the
//! wire protocol and lifecycle pieces so the CLI can talk to a running agent.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod lifecycle;
pub mod protocol;
pub mod server;

pub use lifecycle::{Config, DaemonState, LifecycleError};
pub use protocol::{DumpEntry, Request, Response};
