// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One watch session: the background poll loop behind a single `watch` call.
//!
//! The session exclusively owns its previous snapshot, filter, and sender.
//! Every suspension point (tick wait, listing, send) also waits on the
//! cancellation token, so a full channel never holds off shutdown.

use cw_adapters::Lister;
use cw_core::{
    diff, Clock, Filter, ListOptions, ResourceKind, SessionOptions, Snapshot, WatchEvent,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopReason {
    Cancelled,
    ReceiverDropped,
    MaxEvents,
}

enum Flow {
    Continue,
    Stop(StopReason),
}

pub(crate) struct WatchSession<K: ResourceKind, L, C> {
    lister: L,
    clock: C,
    filter: Filter,
    list_options: ListOptions,
    emit_baseline: bool,
    max_events: Option<usize>,
    poll_interval: Duration,
    /// Last successful snapshot; `None` until the first poll succeeds
    previous: Option<Snapshot<K::Resource>>,
    cycles: u64,
    delivered: usize,
    tx: mpsc::Sender<WatchEvent<K>>,
    cancel: CancellationToken,
}

impl<K, L, C> WatchSession<K, L, C>
where
    K: ResourceKind,
    L: Lister<K::Resource>,
    C: Clock,
{
    pub(crate) fn new(
        lister: L,
        clock: C,
        filter: Filter,
        options: SessionOptions,
        poll_interval: Duration,
        tx: mpsc::Sender<WatchEvent<K>>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            lister,
            clock,
            filter,
            list_options: options.list_options(),
            emit_baseline: options.emit_baseline,
            // Zero means no cap
            max_events: options.max_events.filter(|max| *max > 0),
            poll_interval,
            previous: None,
            cycles: 0,
            delivered: 0,
            tx,
            cancel,
        }
    }

    /// Run until stopped. Dropping `self` at the end closes the channel.
    pub(crate) async fn run(mut self) -> StopReason {
        let span = tracing::info_span!("watch", kind = K::NAME);
        self.run_loop().instrument(span).await
    }

    async fn run_loop(&mut self) -> StopReason {
        tracing::info!(
            interval_ms = self.poll_interval.as_millis() as u64,
            "watch started"
        );

        // First tick fires immediately; a slow poll pushes later ticks back
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let reason = loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break StopReason::Cancelled,
                _ = self.tx.closed() => break StopReason::ReceiverDropped,
                _ = ticker.tick() => {}
            }

            if let Flow::Stop(reason) = self.poll_once().await {
                break reason;
            }
        };

        tracing::info!(
            ?reason,
            cycles = self.cycles,
            delivered = self.delivered,
            "watch stopped"
        );
        reason
    }

    async fn poll_once(&mut self) -> Flow {
        self.cycles += 1;
        let cycle = self.cycles;

        let listed = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Flow::Stop(StopReason::Cancelled),
            result = self.lister.list(&self.list_options) => result,
        };

        let list = match listed {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(cycle, error = %e, "list failed, keeping previous snapshot");
                let event = WatchEvent::error(Arc::new(e), self.clock.now());
                return self.deliver(event).await;
            }
        };

        let current = Snapshot::from_resources(list.into_items());
        let changes = {
            let empty = Snapshot::empty();
            let previous = match &self.previous {
                Some(previous) => Some(previous),
                None if self.emit_baseline => Some(&empty),
                None => None,
            };
            diff::<K>(previous, &current, &self.filter)
        };

        tracing::debug!(
            cycle,
            resources = current.len(),
            changes = changes.len(),
            "poll complete"
        );
        self.previous = Some(current);

        let now = self.clock.now();
        for change in changes {
            if let Flow::Stop(reason) = self.deliver(WatchEvent::from_change(change, now)).await {
                return Flow::Stop(reason);
            }
        }
        Flow::Continue
    }

    async fn deliver(&mut self, event: WatchEvent<K>) -> Flow {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Flow::Stop(StopReason::Cancelled),
            sent = self.tx.send(event) => {
                if sent.is_err() {
                    return Flow::Stop(StopReason::ReceiverDropped);
                }
            }
        }

        self.delivered += 1;
        match self.max_events {
            Some(max) if self.delivered >= max => Flow::Stop(StopReason::MaxEvents),
            _ => Flow::Continue,
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
