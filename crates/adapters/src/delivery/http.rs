// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real HTTP transport for Incident delivery.

use std::time::Duration;

use async_trait::async_trait;

use super::{DeliveryError, DeliveryTransport, TransportOutcome};

const TOTAL_TIMEOUT: Duration = Duration::from_secs(5);

/// Posts a JSON body to the configured URL with `Content-Type:
/// application/json` and a 5-second total timeout.
pub struct HttpDeliveryTransport {
    client: reqwest::Client,
}

impl HttpDeliveryTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(TOTAL_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

impl Default for HttpDeliveryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryTransport for HttpDeliveryTransport {
    async fn send(&self, url: &str, body: &[u8]) -> Result<TransportOutcome, DeliveryError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .send()
            .await
            .map_err(|source| DeliveryError::Network {
                url: url.to_string(),
                message: source.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(TransportOutcome::Delivered)
        } else {
            tracing::warn!(url, status = %status, "ingestion endpoint rejected incident");
            Ok(TransportOutcome::Rejected)
        }
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
