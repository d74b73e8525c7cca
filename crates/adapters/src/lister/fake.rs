// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake lister for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::Lister;
use async_trait::async_trait;
use cw_core::{ListError, ListOptions, Resource, ResourceList};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

struct FakeState<R> {
    items: Vec<R>,
    error: Option<String>,
    fail_next: usize,
    delay: Option<Duration>,
    calls: Vec<ListOptions>,
}

/// Fake lister serving a settable collection
pub struct FakeLister<R> {
    state: Arc<Mutex<FakeState<R>>>,
    called: Arc<Notify>,
}

impl<R> Clone for FakeLister<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            called: Arc::clone(&self.called),
        }
    }
}

impl<R: Resource> Default for FakeLister<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Resource> FakeLister<R> {
    pub fn new(items: Vec<R>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                items,
                error: None,
                fail_next: 0,
                delay: None,
                calls: Vec::new(),
            })),
            called: Arc::new(Notify::new()),
        }
    }

    /// Replace the collection returned by later calls
    pub fn set_items(&self, items: Vec<R>) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).items = items;
    }

    /// Fail every call with this message until cleared
    pub fn set_error(&self, message: impl Into<String>) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).error = Some(message.into());
    }

    pub fn clear_error(&self) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).error = None;
    }

    /// Fail only the next `n` calls
    pub fn fail_next(&self, n: usize) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).fail_next = n;
    }

    /// Block every call for `delay` before answering
    pub fn set_delay(&self, delay: Duration) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).delay = Some(delay);
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).calls.len()
    }

    /// Options passed to each call, in order
    pub fn calls(&self) -> Vec<ListOptions> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Wait until at least `n` calls have been made
    pub async fn wait_for_calls(&self, n: usize) {
        loop {
            let notified = self.called.notified();
            if self.call_count() >= n {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl<R: Resource> Lister<R> for FakeLister<R> {
    async fn list(&self, opts: &ListOptions) -> Result<ResourceList<R>, ListError> {
        let (result, delay) = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.calls.push(opts.clone());

            let result = if state.fail_next > 0 {
                state.fail_next -= 1;
                Err(ListError::Unavailable("injected failure".to_string()))
            } else if let Some(message) = &state.error {
                Err(ListError::Unavailable(message.clone()))
            } else {
                let items: Vec<R> = state
                    .items
                    .iter()
                    .filter(|r| opts.admits_state(&r.state()))
                    .cloned()
                    .collect();
                Ok(ResourceList::new(items))
            };
            (result, state.delay)
        };
        self.called.notify_waiters();

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        result
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
