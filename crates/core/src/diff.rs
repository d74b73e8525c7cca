// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot differ
//!
//! Compares the previous and current snapshot of one watch session and
//! returns the filtered, ordered list of changes for one cycle:
//! new keys first, then state changes, then removals, each in key order.

use crate::event::EventKind;
use crate::kind::ResourceKind;
use crate::options::Filter;
use crate::snapshot::Snapshot;

/// One detected difference between two snapshots
#[derive(Debug, Clone, PartialEq)]
pub enum Change<R> {
    /// Key present now but not before
    New { key: String, state: String, resource: R },
    /// Key present in both with a different state
    StateChange {
        key: String,
        old_state: String,
        new_state: String,
        resource: R,
    },
    /// Key gone since the previous snapshot (jobs only)
    Completed {
        key: String,
        old_state: String,
        new_state: String,
    },
}

impl<R> Change<R> {
    pub fn key(&self) -> &str {
        match self {
            Change::New { key, .. }
            | Change::StateChange { key, .. }
            | Change::Completed { key, .. } => key,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Change::New { .. } => EventKind::New,
            Change::StateChange { .. } => EventKind::StateChange,
            Change::Completed { .. } => EventKind::Completed,
        }
    }
}

/// Diff two snapshots for resource kind `K`.
///
/// With no previous snapshot the current one is a silent baseline. Callers
/// that want the first population reported pass an empty snapshot instead.
pub fn diff<K: ResourceKind>(
    previous: Option<&Snapshot<K::Resource>>,
    current: &Snapshot<K::Resource>,
    filter: &Filter,
) -> Vec<Change<K::Resource>> {
    let Some(previous) = previous else {
        return Vec::new();
    };

    let mut added = Vec::new();
    let mut changed = Vec::new();

    for (key, entry) in current.iter() {
        match previous.state_of(key) {
            None => added.push(Change::New {
                key: key.to_string(),
                state: entry.state.clone(),
                resource: entry.resource.clone(),
            }),
            Some(old) if old != entry.state => changed.push(Change::StateChange {
                key: key.to_string(),
                old_state: old.to_string(),
                new_state: entry.state.clone(),
                resource: entry.resource.clone(),
            }),
            Some(_) => {}
        }
    }

    let removed = previous
        .iter()
        .filter(|(key, _)| !current.contains(key))
        .filter_map(|(key, entry)| K::on_removed(key, &entry.state));

    added
        .into_iter()
        .chain(changed)
        .chain(removed)
        .filter(|change| filter.admits(change.kind(), change.key()))
        .collect()
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
