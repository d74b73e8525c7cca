// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Cluster watch engine: background polling sessions that turn snapshot
//! diffs into typed events

mod config;
mod error;
mod poller;
mod session;

pub use config::{PollerConfig, DEFAULT_BUFFER_SIZE, DEFAULT_POLL_INTERVAL, MAX_BUFFER_SIZE};
pub use error::{ConfigError, WatchError};
pub use poller::{JobPoller, NodePoller, PartitionPoller, Poller};

pub use tokio_util::sync::CancellationToken;
