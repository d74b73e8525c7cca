// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-kind event mapping
//!
//! The diff and poll loop are shared by every resource kind. What differs is
//! the event naming and what a disappearance means: a job that leaves the
//! listing has finished, while a node or partition that leaves is simply no
//! longer tracked.

use crate::diff::Change;
use crate::event::EventKind;
use crate::options::{WatchJobsOptions, WatchNodesOptions, WatchOptions, WatchPartitionsOptions};
use crate::resource::{Job, Node, Partition, Resource};
use serde::Serialize;
use std::fmt::Debug;

/// State synthesized for a job that disappeared from the listing
pub const COMPLETED_STATE: &str = "COMPLETED";

/// Strategy describing one kind of watched resource
pub trait ResourceKind: Debug + Clone + Copy + Send + Sync + 'static {
    type Resource: Resource + Debug + Serialize;
    type Options: WatchOptions;

    /// Short lowercase name used in logs and event types
    const NAME: &'static str;

    /// Field name used for the resource identity in encoded events
    const KEY_FIELD: &'static str;

    /// Wire-style event type name for an event kind
    fn event_type(kind: EventKind) -> &'static str;

    /// Change to emit when a key present in the previous snapshot is gone
    fn on_removed(key: &str, last_state: &str) -> Option<Change<Self::Resource>>;
}

/// Compute jobs
#[derive(Debug, Clone, Copy, Default)]
pub struct Jobs;

impl ResourceKind for Jobs {
    type Resource = Job;
    type Options = WatchJobsOptions;

    const NAME: &'static str = "job";
    const KEY_FIELD: &'static str = "job_id";

    fn event_type(kind: EventKind) -> &'static str {
        match kind {
            EventKind::New => "job_new",
            EventKind::StateChange => "job_state_change",
            EventKind::Completed => "job_completed",
            EventKind::Error => "error",
        }
    }

    fn on_removed(key: &str, last_state: &str) -> Option<Change<Job>> {
        Some(Change::Completed {
            key: key.to_string(),
            old_state: last_state.to_string(),
            new_state: COMPLETED_STATE.to_string(),
        })
    }
}

/// Compute nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct Nodes;

impl ResourceKind for Nodes {
    type Resource = Node;
    type Options = WatchNodesOptions;

    const NAME: &'static str = "node";
    const KEY_FIELD: &'static str = "node_name";

    fn event_type(kind: EventKind) -> &'static str {
        match kind {
            EventKind::New => "node_new",
            // Nodes never complete
            EventKind::StateChange | EventKind::Completed => "node_state_change",
            EventKind::Error => "error",
        }
    }

    fn on_removed(_key: &str, _last_state: &str) -> Option<Change<Node>> {
        None
    }
}

/// Scheduling partitions
#[derive(Debug, Clone, Copy, Default)]
pub struct Partitions;

impl ResourceKind for Partitions {
    type Resource = Partition;
    type Options = WatchPartitionsOptions;

    const NAME: &'static str = "partition";
    const KEY_FIELD: &'static str = "partition_name";

    fn event_type(kind: EventKind) -> &'static str {
        match kind {
            EventKind::New => "partition_new",
            EventKind::StateChange | EventKind::Completed => "partition_state_change",
            EventKind::Error => "error",
        }
    }

    fn on_removed(_key: &str, _last_state: &str) -> Option<Change<Partition>> {
        None
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
