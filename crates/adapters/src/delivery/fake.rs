// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake delivery transport for testing.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{DeliveryError, DeliveryTransport, TransportOutcome};

/// A single recorded `send` call.
#[derive(Debug, Clone)]
pub struct DeliveryCall {
    pub url: String,
    pub body: Vec<u8>,
}

struct FakeState {
    calls: Vec<DeliveryCall>,
    next_outcome: Option<Result<TransportOutcome, String>>,
}

/// Records every `send` call and returns a scripted outcome (defaulting to
/// [`TransportOutcome::Delivered`]) without touching the network.
#[derive(Clone)]
pub struct FakeDeliveryTransport {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakeDeliveryTransport {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                calls: Vec::new(),
                next_outcome: None,
            })),
        }
    }
}

impl FakeDeliveryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DeliveryCall> {
        self.inner.lock().calls.clone()
    }

    /// Script the outcome of the next `send` call only.
    pub fn set_next_outcome(&self, outcome: Result<TransportOutcome, String>) {
        self.inner.lock().next_outcome = Some(outcome);
    }
}

#[async_trait]
impl DeliveryTransport for FakeDeliveryTransport {
    async fn send(&self, url: &str, body: &[u8]) -> Result<TransportOutcome, DeliveryError> {
        let mut state = self.inner.lock();
        state.calls.push(DeliveryCall {
            url: url.to_string(),
            body: body.to_vec(),
        });
        match state.next_outcome.take() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(message)) => Err(DeliveryError::Network {
                url: url.to_string(),
                message,
            }),
            None => Ok(TransportOutcome::Delivered),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
