// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::{Duration, Instant};

use idt_core::{Clock, RawLine, SystemClock};
use tokio::sync::mpsc;

use super::*;

fn line(text: &str) -> RawLine {
    RawLine::new(text, Instant::now()).expect("non-empty line")
}

fn reassembler() -> Reassembler {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    Reassembler::new(50, "host".to_string(), None, clock)
}

#[tokio::test]
async fn forwards_incident_emitted_by_a_non_continuation_line() {
    let (line_tx, line_rx) = mpsc::channel(16);
    let (incident_tx, mut incident_rx) = mpsc::channel(16);

    let handle = tokio::spawn(run(reassembler(), line_rx, incident_tx));

    line_tx.send(line("ERROR: boom")).await.unwrap();
    line_tx.send(line("[INFO] closing")).await.unwrap();
    drop(line_tx);

    let incident = tokio::time::timeout(Duration::from_secs(2), incident_rx.recv())
        .await
        .expect("incident arrives before timeout")
        .expect("channel open");
    assert_eq!(incident.error_line, "ERROR: boom");

    handle.await.expect("pipeline task does not panic");
}

#[tokio::test]
async fn emits_incident_on_real_timeout_with_no_further_lines() {
    let (line_tx, line_rx) = mpsc::channel(16);
    let (incident_tx, mut incident_rx) = mpsc::channel(16);

    let handle = tokio::spawn(run(reassembler(), line_rx, incident_tx));

    line_tx.send(line("panic: runtime error")).await.unwrap();

    let incident = tokio::time::timeout(Duration::from_secs(2), incident_rx.recv())
        .await
        .expect("incident arrives once TRACE_DURATION_MS elapses")
        .expect("channel open");
    assert_eq!(incident.error_line, "panic: runtime error");

    drop(line_tx);
    handle.await.expect("pipeline task does not panic");
}

#[tokio::test]
async fn stops_cleanly_when_line_channel_closes_while_idle() {
    let (line_tx, line_rx) = mpsc::channel::<RawLine>(16);
    let (incident_tx, _incident_rx) = mpsc::channel(16);

    drop(line_tx);
    let result = tokio::time::timeout(Duration::from_secs(2), run(reassembler(), line_rx, incident_tx)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn stops_when_incident_receiver_is_dropped() {
    let (line_tx, line_rx) = mpsc::channel(16);
    let (incident_tx, incident_rx) = mpsc::channel(16);
    drop(incident_rx);

    let handle = tokio::spawn(run(reassembler(), line_rx, incident_tx));

    line_tx.send(line("ERROR: boom")).await.unwrap();
    line_tx.send(line("[INFO] closing")).await.unwrap();

    let result = tokio::time::timeout(Duration::from_secs(2), handle).await;
    assert!(result.is_ok());
}
