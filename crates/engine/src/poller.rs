// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change-detection poller
//!
//! A [`Poller`] pairs a lister with a resource kind. Each call to
//! [`Poller::watch`] starts an independent session that polls in the
//! background and delivers events on a bounded channel until the
//! cancellation token fires, the receiver is dropped, or the optional
//! event cap is reached.

use crate::config::PollerConfig;
use crate::error::WatchError;
use crate::session::WatchSession;
use cw_adapters::Lister;
use cw_core::{Clock, Jobs, Nodes, Partitions, ResourceKind, SystemClock, WatchEvent, WatchOptions};
use std::marker::PhantomData;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Watches one kind of resource for changes
pub struct Poller<K, L, C = SystemClock> {
    lister: L,
    config: PollerConfig,
    clock: C,
    _kind: PhantomData<fn() -> K>,
}

pub type JobPoller<L> = Poller<Jobs, L>;
pub type NodePoller<L> = Poller<Nodes, L>;
pub type PartitionPoller<L> = Poller<Partitions, L>;

impl<K, L, C> Clone for Poller<K, L, C>
where
    L: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            lister: self.lister.clone(),
            config: self.config.clone(),
            clock: self.clock.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K, L> Poller<K, L, SystemClock>
where
    K: ResourceKind,
    L: Lister<K::Resource>,
{
    /// Poller with the default interval and buffer size
    pub fn new(lister: L) -> Self {
        Self {
            lister,
            config: PollerConfig::default(),
            clock: SystemClock,
            _kind: PhantomData,
        }
    }
}

impl<K, L, C> Poller<K, L, C>
where
    K: ResourceKind,
    L: Lister<K::Resource>,
    C: Clock,
{
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    pub fn with_config(mut self, config: PollerConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap the clock used to stamp events
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Poller<K, L, C2> {
        Poller {
            lister: self.lister,
            config: self.config,
            clock,
            _kind: PhantomData,
        }
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    pub fn lister(&self) -> &L {
        &self.lister
    }

    /// Start a watch session.
    ///
    /// Returns immediately; the first poll runs in the background and
    /// only establishes a baseline unless `emit_baseline` is set. The
    /// channel closes once the session stops. Configuration is checked
    /// here, so a zero interval or an out-of-range buffer is reported
    /// before any task is spawned.
    pub fn watch(
        &self,
        cancel: CancellationToken,
        opts: K::Options,
    ) -> Result<mpsc::Receiver<WatchEvent<K>>, WatchError> {
        let session_opts = opts.session();
        let effective = PollerConfig {
            poll_interval: session_opts.poll_interval.unwrap_or(self.config.poll_interval),
            buffer_size: self.config.buffer_size,
        };
        effective.validate()?;

        let handle = Handle::try_current().map_err(|_| WatchError::NoRuntime)?;
        let (tx, rx) = mpsc::channel(effective.buffer_size);

        let session = WatchSession::<K, L, C>::new(
            self.lister.clone(),
            self.clock.clone(),
            opts.filter(),
            session_opts,
            effective.poll_interval,
            tx,
            cancel,
        );

        tracing::debug!(
            kind = K::NAME,
            interval_ms = effective.poll_interval.as_millis() as u64,
            buffer = effective.buffer_size,
            "spawning watch session"
        );
        handle.spawn(session.run());

        Ok(rx)
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
