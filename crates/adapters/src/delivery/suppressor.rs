// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duplicate suppression: drop an Incident that structurally repeats the
//! last one delivered within the cooldown window.

use idt_core::{Clock, Incident};
use sha2::{Digest, Sha256};

/// How long a structurally identical Incident is suppressed after the last
/// non-suppressed emission.
pub const COOLDOWN: std::time::Duration = std::time::Duration::from_secs(idt_core::COOLDOWN_SECS);

/// `(lastHash, lastTime)`, mutated only by the Delivery Client.
#[derive(Debug, Default)]
pub struct DuplicateSuppressor {
    last: Option<(String, std::time::Instant)>,
}

impl DuplicateSuppressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `incident` is a duplicate of the last delivered Incident
    /// within the cooldown window. Does not mutate state — call
    /// [`DuplicateSuppressor::record`] after a successful send.
    pub fn is_duplicate(&self, incident: &Incident, clock: &dyn Clock) -> bool {
        let Some((last_hash, last_time)) = &self.last else {
            return false;
        };
        let hash = hash_incident(incident);
        &hash == last_hash && clock.now().duration_since(*last_time) < COOLDOWN
    }

    /// Record `incident` as the most recently delivered one.
    pub fn record(&mut self, incident: &Incident, clock: &dyn Clock) {
        self.last = Some((hash_incident(incident), clock.now()));
    }
}

/// SHA-256 over `errorLine` concatenated with up to the first three context
/// lines, truncated to the first 8 bytes (16 hex chars).
fn hash_incident(incident: &Incident) -> String {
    let mut hasher = Sha256::new();
    hasher.update(incident.error_line.as_bytes());
    for line in incident.context.iter().take(3) {
        hasher.update(line.as_bytes());
    }
    let digest = hasher.finalize();
    digest[..8].iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
#[path = "suppressor_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "suppressor_proptests.rs"]
mod proptests;
