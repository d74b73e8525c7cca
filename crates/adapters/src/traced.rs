// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced lister wrapper for consistent observability

use crate::lister::Lister;
use async_trait::async_trait;
use cw_core::{ListError, ListOptions, Resource, ResourceList};
use std::time::Duration;
use tracing::Instrument;

/// Wrapper that adds tracing and an optional deadline to any Lister
#[derive(Clone)]
pub struct TracedLister<L> {
    inner: L,
    timeout: Option<Duration>,
}

impl<L> TracedLister<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            timeout: None,
        }
    }

    /// Fail a call with `ListError::Timeout` once it runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

#[async_trait]
impl<R, L> Lister<R> for TracedLister<L>
where
    R: Resource,
    L: Lister<R>,
{
    async fn list(&self, opts: &ListOptions) -> Result<ResourceList<R>, ListError> {
        let span = tracing::debug_span!("lister.list", states = ?opts.states);

        let start = std::time::Instant::now();
        let call = self.inner.list(opts).instrument(span.clone());
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or_else(|_| Err(ListError::Timeout(limit))),
            None => call.await,
        };
        let elapsed = start.elapsed();

        let _guard = span.enter();
        match &result {
            Ok(list) => tracing::debug!(
                items = list.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "listed"
            ),
            Err(e) => tracing::warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "list failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
