// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-watch options and the post-diff filter

use crate::event::EventKind;
use crate::list::ListOptions;
use std::collections::BTreeSet;
use std::time::Duration;

/// Filter applied to each cycle's changes before delivery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    keys: BTreeSet<String>,
    exclude_new: bool,
    exclude_completed: bool,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_new(mut self, exclude: bool) -> Self {
        self.exclude_new = exclude;
        self
    }

    pub fn exclude_completed(mut self, exclude: bool) -> Self {
        self.exclude_completed = exclude;
        self
    }

    pub fn excludes_new(&self) -> bool {
        self.exclude_new
    }

    /// Check whether an event of `kind` for `key` should be delivered
    pub fn admits(&self, kind: EventKind, key: &str) -> bool {
        match kind {
            // Listing failures carry no identity and are always reported
            EventKind::Error => return true,
            EventKind::New if self.exclude_new => return false,
            EventKind::Completed if self.exclude_completed => return false,
            _ => {}
        }
        self.keys.is_empty() || self.keys.contains(key)
    }
}

/// Session behavior that is not part of the filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// State filter forwarded to the lister
    pub states: Vec<String>,
    /// Report the first poll's population as `new` events
    pub emit_baseline: bool,
    /// Close the session after this many delivered events
    pub max_events: Option<usize>,
    /// Override the poller's interval for this session
    pub poll_interval: Option<Duration>,
}

impl SessionOptions {
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            states: self.states.clone(),
        }
    }
}

/// Options accepted by `watch` for one resource kind
pub trait WatchOptions: Clone + Default + Send + Sync + 'static {
    fn filter(&self) -> Filter;
    fn session(&self) -> SessionOptions;
}

/// Options for watching jobs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchJobsOptions {
    /// Only report these job ids (empty = all)
    pub job_ids: Vec<String>,
    pub states: Vec<String>,
    pub exclude_new: bool,
    pub exclude_completed: bool,
    pub emit_baseline: bool,
    pub max_events: Option<usize>,
    pub poll_interval: Option<Duration>,
}

impl WatchJobsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.job_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_new(mut self) -> Self {
        self.exclude_new = true;
        self
    }

    pub fn exclude_completed(mut self) -> Self {
        self.exclude_completed = true;
        self
    }

    pub fn emit_baseline(mut self) -> Self {
        self.emit_baseline = true;
        self
    }

    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = Some(max);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }
}

impl WatchOptions for WatchJobsOptions {
    fn filter(&self) -> Filter {
        Filter::new()
            .with_keys(self.job_ids.iter().cloned())
            .exclude_new(self.exclude_new)
            .exclude_completed(self.exclude_completed)
    }

    fn session(&self) -> SessionOptions {
        SessionOptions {
            states: self.states.clone(),
            emit_baseline: self.emit_baseline,
            max_events: self.max_events,
            poll_interval: self.poll_interval,
        }
    }
}

/// Options for watching nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchNodesOptions {
    /// Only report these node names (empty = all)
    pub node_names: Vec<String>,
    pub states: Vec<String>,
    pub exclude_new: bool,
    pub emit_baseline: bool,
    pub max_events: Option<usize>,
    pub poll_interval: Option<Duration>,
}

impl WatchNodesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_new(mut self) -> Self {
        self.exclude_new = true;
        self
    }

    pub fn emit_baseline(mut self) -> Self {
        self.emit_baseline = true;
        self
    }

    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = Some(max);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }
}

impl WatchOptions for WatchNodesOptions {
    fn filter(&self) -> Filter {
        Filter::new()
            .with_keys(self.node_names.iter().cloned())
            .exclude_new(self.exclude_new)
    }

    fn session(&self) -> SessionOptions {
        SessionOptions {
            states: self.states.clone(),
            emit_baseline: self.emit_baseline,
            max_events: self.max_events,
            poll_interval: self.poll_interval,
        }
    }
}

/// Options for watching partitions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchPartitionsOptions {
    /// Only report these partition names (empty = all)
    pub partition_names: Vec<String>,
    pub states: Vec<String>,
    pub exclude_new: bool,
    pub emit_baseline: bool,
    pub max_events: Option<usize>,
    pub poll_interval: Option<Duration>,
}

impl WatchPartitionsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partition_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partition_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_new(mut self) -> Self {
        self.exclude_new = true;
        self
    }

    pub fn emit_baseline(mut self) -> Self {
        self.emit_baseline = true;
        self
    }

    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = Some(max);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }
}

impl WatchOptions for WatchPartitionsOptions {
    fn filter(&self) -> Filter {
        Filter::new()
            .with_keys(self.partition_names.iter().cloned())
            .exclude_new(self.exclude_new)
    }

    fn session(&self) -> SessionOptions {
        SessionOptions {
            states: self.states.clone(),
            emit_baseline: self.emit_baseline,
            max_events: self.max_events,
            poll_interval: self.poll_interval,
        }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
