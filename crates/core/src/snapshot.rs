// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time keyed view of a resource collection

use crate::resource::Resource;
use std::collections::BTreeMap;

/// One resource as seen by a single poll
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<R> {
    pub state: String,
    pub resource: R,
}

/// Immutable snapshot taken from one listing call.
///
/// Keys iterate in sorted order, so diffs over the same pair of snapshots
/// always produce events in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<R> {
    entries: BTreeMap<String, Entry<R>>,
}

impl<R: Resource> Snapshot<R> {
    /// Build a snapshot from a listing result. Later duplicates of a key win.
    pub fn from_resources<I>(resources: I) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        let entries = resources
            .into_iter()
            .map(|resource| {
                let entry = Entry {
                    state: resource.state(),
                    resource,
                };
                (entry.resource.key(), entry)
            })
            .collect();
        Self { entries }
    }
}

impl<R> Snapshot<R> {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Entry<R>> {
        self.entries.get(key)
    }

    pub fn state_of(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.state.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry<R>)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }
}

impl<R> Default for Snapshot<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: Resource> FromIterator<R> for Snapshot<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::from_resources(iter)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
