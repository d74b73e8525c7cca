// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cw-core: pure model for cluster resource watching
//!
//! This crate provides:
//! - Resource types (jobs, nodes, partitions) and the `Resource` capability
//! - Immutable snapshots and the snapshot differ
//! - Per-kind event mapping (`ResourceKind`) and typed watch events
//! - Watch options and the post-diff filter
//! - Clock abstraction for event timestamps

pub mod clock;
pub mod diff;
pub mod event;
pub mod kind;
pub mod list;
pub mod options;
pub mod resource;
pub mod snapshot;

pub use clock::{Clock, FakeClock, SystemClock};
pub use diff::{diff, Change};
pub use event::{EventKind, JobEvent, NodeEvent, PartitionEvent, WatchEvent};
pub use kind::{Jobs, Nodes, Partitions, ResourceKind, COMPLETED_STATE};
pub use list::{ListError, ListOptions, ResourceList};
pub use options::{
    Filter, SessionOptions, WatchJobsOptions, WatchNodesOptions, WatchOptions,
    WatchPartitionsOptions,
};
pub use resource::{Job, Node, Partition, Resource};
pub use snapshot::{Entry, Snapshot};
