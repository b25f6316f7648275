// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The reassembled incident event handed off to the delivery client.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::line::RawLine;

/// A recognized error trace plus its surrounding context, ready to be
/// delivered to the ingestion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Incident {
    #[serde(rename = "error_line")]
    pub error_line: String,
    pub timestamp: DateTime<Utc>,
    pub hostname: String,
    #[serde(rename = "repo_url", skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    pub context: Vec<String>,
}

impl Incident {
    /// Build an incident from the accumulated trace lines.
    ///
    /// `lines` must be non-empty; the error line is the last line of the
    /// trace, matching the invariant that every incident's `error_line`
    /// equals `context[len - 1]`.
    pub fn from_context(
        lines: &[RawLine],
        hostname: String,
        repo_url: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Option<Self> {
        let error_line = lines.last()?.text().to_string();
        let context = lines.iter().map(|l| l.text().to_string()).collect();
        Some(Self {
            error_line,
            timestamp,
            hostname,
            repo_url: repo_url.filter(|s| !s.is_empty()),
            context,
        })
    }

    /// Current hostname, or `"unknown"` if it cannot be determined.
    pub fn local_hostname() -> String {
        hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[cfg(test)]
#[path = "incident_tests.rs"]
mod tests;
