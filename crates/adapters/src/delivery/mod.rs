// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incident delivery: duplicate suppression and HTTP transport.

mod client;
mod http;
mod suppressor;

pub use client::{DeliveryClient, DeliveryError};
pub use http::HttpDeliveryTransport;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DeliveryCall, FakeDeliveryTransport};

use async_trait::async_trait;

/// Outcome of a single transport attempt, distinct from suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportOutcome {
    Delivered,
    Rejected,
}

/// Adapter for sending a serialized Incident body over the wire.
#[async_trait]
pub trait DeliveryTransport: Send + Sync + 'static {
    async fn send(&self, url: &str, body: &[u8]) -> Result<TransportOutcome, DeliveryError>;
}
