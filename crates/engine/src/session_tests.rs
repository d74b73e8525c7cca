// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use cw_adapters::FakeLister;
use cw_core::{FakeClock, Job, Jobs, Node, Nodes, WatchEvent};

const INTERVAL: Duration = Duration::from_millis(100);

fn job_session(
    lister: &FakeLister<Job>,
    options: SessionOptions,
    buffer: usize,
) -> (
    WatchSession<Jobs, FakeLister<Job>, FakeClock>,
    mpsc::Receiver<WatchEvent<Jobs>>,
    CancellationToken,
) {
    let (tx, rx) = mpsc::channel(buffer);
    let cancel = CancellationToken::new();
    let session = WatchSession::new(
        lister.clone(),
        FakeClock::new(),
        Filter::new(),
        options,
        INTERVAL,
        tx,
        cancel.clone(),
    );
    (session, rx, cancel)
}

#[tokio::test(start_paused = true)]
async fn cancellation_stops_with_cancelled() {
    let lister = FakeLister::new(vec![Job::new(1, "RUNNING")]);
    let (session, mut rx, cancel) = job_session(&lister, SessionOptions::default(), 10);

    let handle = tokio::spawn(session.run());
    lister.wait_for_calls(1).await;
    cancel.cancel();

    assert_eq!(handle.await.unwrap(), StopReason::Cancelled);
    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn dropped_receiver_stops_session() {
    let lister = FakeLister::new(vec![Job::new(1, "RUNNING")]);
    let (session, rx, _cancel) = job_session(&lister, SessionOptions::default(), 10);

    let handle = tokio::spawn(session.run());
    lister.wait_for_calls(1).await;
    drop(rx);

    assert_eq!(handle.await.unwrap(), StopReason::ReceiverDropped);
    let calls = lister.call_count();
    tokio::time::sleep(INTERVAL * 5).await;
    assert_eq!(lister.call_count(), calls);
}

#[tokio::test(start_paused = true)]
async fn max_events_stops_after_cap() {
    let lister = FakeLister::new(vec![
        Job::new(1, "RUNNING"),
        Job::new(2, "PENDING"),
        Job::new(3, "PENDING"),
    ]);
    let options = SessionOptions {
        emit_baseline: true,
        max_events: Some(2),
        ..SessionOptions::default()
    };
    let (session, mut rx, _cancel) = job_session(&lister, options, 10);

    let reason = session.run().await;
    assert_eq!(reason, StopReason::MaxEvents);

    let mut keys = Vec::new();
    while let Some(event) = rx.recv().await {
        keys.push(event.key);
    }
    assert_eq!(keys, vec!["1", "2"]);
}

#[tokio::test(start_paused = true)]
async fn zero_max_events_means_unlimited() {
    let lister = FakeLister::new(vec![Job::new(1, "RUNNING")]);
    let options = SessionOptions {
        emit_baseline: true,
        max_events: Some(0),
        ..SessionOptions::default()
    };
    let (session, mut rx, cancel) = job_session(&lister, options, 10);

    let handle = tokio::spawn(session.run());
    let first = rx.recv().await.unwrap();
    assert_eq!(first.key, "1");

    cancel.cancel();
    assert_eq!(handle.await.unwrap(), StopReason::Cancelled);
}

#[tokio::test(start_paused = true)]
async fn state_filter_is_forwarded_to_lister() {
    let lister = FakeLister::new(vec![Job::new(1, "RUNNING"), Job::new(2, "PENDING")]);
    let options = SessionOptions {
        states: vec!["PENDING".into()],
        emit_baseline: true,
        max_events: Some(1),
        ..SessionOptions::default()
    };
    let (session, mut rx, _cancel) = job_session(&lister, options, 10);

    session.run().await;

    assert_eq!(lister.calls()[0].states, vec!["PENDING".to_string()]);
    assert_eq!(rx.recv().await.unwrap().key, "2");
}

#[tokio::test(start_paused = true)]
async fn events_are_stamped_from_clock() {
    let lister = FakeLister::new(vec![Node::new("node-001", "IDLE")]);
    let clock = FakeClock::new();
    let (tx, mut rx) = mpsc::channel(10);
    let session: WatchSession<Nodes, _, _> = WatchSession::new(
        lister.clone(),
        clock.clone(),
        Filter::new(),
        SessionOptions {
            emit_baseline: true,
            max_events: Some(1),
            ..SessionOptions::default()
        },
        INTERVAL,
        tx,
        CancellationToken::new(),
    );

    session.run().await;

    let event = rx.recv().await.unwrap();
    assert_eq!(event.event_time, clock.now());
    assert_eq!(event.node_name(), "node-001");
}
