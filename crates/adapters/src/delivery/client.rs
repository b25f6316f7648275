// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Consumes Incidents from a channel, applies duplicate suppression, and
//! hands surviving ones to a [`DeliveryTransport`].

use thiserror::Error;
use tokio::sync::mpsc;

use idt_core::{Clock, Incident};

use super::suppressor::DuplicateSuppressor;
use super::{DeliveryTransport, TransportOutcome};

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("network error posting to {url}: {message}")]
    Network { url: String, message: String },
}

/// Owns the duplicate-suppressor state and drains the Incident channel until
/// it closes, posting each surviving Incident through `transport`.
pub struct DeliveryClient<T: DeliveryTransport> {
    transport: T,
    url: String,
    suppressor: DuplicateSuppressor,
    clock: Box<dyn Clock>,
}

impl<T: DeliveryTransport> DeliveryClient<T> {
    pub fn new(transport: T, url: impl Into<String>, clock: Box<dyn Clock>) -> Self {
        Self {
            transport,
            url: url.into(),
            suppressor: DuplicateSuppressor::new(),
            clock,
        }
    }

    /// Drain `incident_rx` until the sender side closes — which happens
    /// once the upstream Tailer and Reassembler have shut down — finishing
    /// any in-flight POST before returning. The shutdown cancellation token
    /// is not observed directly here; the Delivery Client's lifetime is
    /// entirely governed by the channel it consumes.
    pub async fn run(mut self, mut incident_rx: mpsc::Receiver<Incident>) {
        while let Some(incident) = incident_rx.recv().await {
            self.deliver(incident).await;
        }
    }

    async fn deliver(&mut self, incident: Incident) {
        if self.suppressor.is_duplicate(&incident, self.clock.as_ref()) {
            tracing::info!(error_line = %incident.error_line, "dropping duplicate incident");
            return;
        }

        let body = match serde_json::to_vec(&incident) {
            Ok(body) => body,
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize incident");
                return;
            }
        };

        match self.transport.send(&self.url, &body).await {
            Ok(TransportOutcome::Delivered) => {
                self.suppressor.record(&incident, self.clock.as_ref());
                tracing::info!(error_line = %incident.error_line, "delivered incident");
            }
            Ok(TransportOutcome::Rejected) => {
                tracing::error!(error_line = %incident.error_line, "ingestion endpoint rejected incident");
            }
            Err(err) => {
                tracing::error!(error_line = %incident.error_line, error = %err, "failed to deliver incident");
            }
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
