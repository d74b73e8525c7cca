// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watch events delivered to consumers

use crate::diff::Change;
use crate::kind::{Jobs, Nodes, Partitions, ResourceKind};
use crate::list::ListError;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::sync::Arc;

/// What a watch event reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    New,
    StateChange,
    Completed,
    Error,
}

/// One detected change (or listing failure) for resource kind `K`
#[derive(Debug, Clone)]
pub struct WatchEvent<K: ResourceKind> {
    pub kind: EventKind,
    /// Resource identity; empty for errors
    pub key: String,
    /// State before the change; empty for `New`
    pub old_state: String,
    pub new_state: String,
    /// Listing failure; set only for `Error`
    pub error: Option<Arc<ListError>>,
    /// Full resource value for `New` and `StateChange`
    pub resource: Option<K::Resource>,
    pub event_time: DateTime<Utc>,
}

pub type JobEvent = WatchEvent<Jobs>;
pub type NodeEvent = WatchEvent<Nodes>;
pub type PartitionEvent = WatchEvent<Partitions>;

impl<K: ResourceKind> WatchEvent<K> {
    pub fn from_change(change: Change<K::Resource>, event_time: DateTime<Utc>) -> Self {
        let kind = change.kind();
        match change {
            Change::New {
                key,
                state,
                resource,
            } => Self {
                kind,
                key,
                old_state: String::new(),
                new_state: state,
                error: None,
                resource: Some(resource),
                event_time,
            },
            Change::StateChange {
                key,
                old_state,
                new_state,
                resource,
            } => Self {
                kind,
                key,
                old_state,
                new_state,
                error: None,
                resource: Some(resource),
                event_time,
            },
            Change::Completed {
                key,
                old_state,
                new_state,
            } => Self {
                kind,
                key,
                old_state,
                new_state,
                error: None,
                resource: None,
                event_time,
            },
        }
    }

    pub fn error(error: Arc<ListError>, event_time: DateTime<Utc>) -> Self {
        Self {
            kind: EventKind::Error,
            key: String::new(),
            old_state: String::new(),
            new_state: String::new(),
            error: Some(error),
            resource: None,
            event_time,
        }
    }

    /// Wire-style type name, e.g. `job_state_change`
    pub fn event_type(&self) -> &'static str {
        K::event_type(self.kind)
    }

    pub fn is_error(&self) -> bool {
        self.kind == EventKind::Error
    }
}

impl WatchEvent<Jobs> {
    pub fn job_id(&self) -> &str {
        &self.key
    }
}

impl WatchEvent<Nodes> {
    pub fn node_name(&self) -> &str {
        &self.key
    }
}

impl WatchEvent<Partitions> {
    pub fn partition_name(&self) -> &str {
        &self.key
    }
}

impl<K: ResourceKind> fmt::Display for WatchEvent<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = self.event_type();
        match self.kind {
            EventKind::Error => match &self.error {
                Some(e) => write!(f, "{}: {}", ty, e),
                None => write!(f, "{}", ty),
            },
            EventKind::New => write!(f, "{} {} {}", ty, self.key, self.new_state),
            EventKind::StateChange | EventKind::Completed => write!(
                f,
                "{} {} {} -> {}",
                ty, self.key, self.old_state, self.new_state
            ),
        }
    }
}

impl<K: ResourceKind> Serialize for WatchEvent<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WatchEvent", 7)?;
        state.serialize_field("type", self.event_type())?;
        if self.is_error() {
            state.skip_field(K::KEY_FIELD)?;
        } else {
            state.serialize_field(K::KEY_FIELD, &self.key)?;
        }
        if self.old_state.is_empty() {
            state.skip_field("old_state")?;
        } else {
            state.serialize_field("old_state", &self.old_state)?;
        }
        if self.new_state.is_empty() {
            state.skip_field("new_state")?;
        } else {
            state.serialize_field("new_state", &self.new_state)?;
        }
        match &self.error {
            Some(e) => state.serialize_field("error", &e.to_string())?,
            None => state.skip_field("error")?,
        }
        match &self.resource {
            Some(r) => state.serialize_field(K::NAME, r)?,
            None => state.skip_field(K::NAME)?,
        }
        state.serialize_field("event_time", &self.event_time)?;
        state.end()
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
