// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Types shared with the listing operation

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Parameters forwarded to a lister on every poll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Only return resources in one of these states (empty = all)
    pub states: Vec<String>,
}

impl ListOptions {
    /// Check a state against the state filter
    pub fn admits_state(&self, state: &str) -> bool {
        self.states.is_empty() || self.states.iter().any(|s| s == state)
    }
}

/// Result of one listing call
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceList<R> {
    pub items: Vec<R>,
    pub total: usize,
}

impl<R> ResourceList<R> {
    pub fn new(items: Vec<R>) -> Self {
        let total = items.len();
        Self { items, total }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn into_items(self) -> Vec<R> {
        self.items
    }
}

impl<R> Default for ResourceList<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Errors from a listing call. Every variant is a cycle failure to the poller.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("listing unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode listing: {0}")]
    Decode(String),
    #[error("listing timed out after {0:?}")]
    Timeout(Duration),
}
