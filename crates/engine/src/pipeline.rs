// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drives a [`Reassembler`] from a stream of lines, forwarding emitted
//! Incidents onto a bounded channel.
//!
//! The Reassembler itself has no failure modes (spec §4.4): the loop here
//! only ever stops because the line channel closed (the Tailer shut down)
//! or the Incident channel's receiver was dropped (the Delivery Client
//! shut down first, which should not normally happen before the Tailer).

use tokio::sync::mpsc;
use tokio::time::Instant as TokioInstant;

use idt_core::{Incident, RawLine};

use crate::Reassembler;

/// Consume `line_rx` until it closes, feeding every line to `reassembler`
/// and forwarding emitted Incidents onto `incident_tx`. Also drives the
/// idle-tick timeout path: when no line arrives before the Reassembler's
/// current deadline, calls `on_timeout` directly.
pub async fn run(
    mut reassembler: Reassembler,
    mut line_rx: mpsc::Receiver<RawLine>,
    incident_tx: mpsc::Sender<Incident>,
) {
    loop {
        let incident = match reassembler.deadline() {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    maybe_line = line_rx.recv() => match maybe_line {
                        Some(line) => reassembler.on_line(line),
                        None => break,
                    },
                    _ = tokio::time::sleep_until(TokioInstant::from_std(deadline)) => {
                        reassembler.on_timeout()
                    }
                }
            }
            None => match line_rx.recv().await {
                Some(line) => reassembler.on_line(line),
                None => break,
            },
        };

        if let Some(incident) = incident {
            tracing::info!(error_line = %incident.error_line, "incident recognized");
            if incident_tx.send(incident).await.is_err() {
                tracing::debug!("incident receiver dropped, reassembler stopping");
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
