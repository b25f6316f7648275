// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction so trace timeouts and the duplicate-suppression
//! cooldown can be driven deterministically in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

/// Source of wall-clock time, abstracted so tests can control it.
pub trait Clock: Send + Sync {
    /// A monotonic instant, used for timeouts and cooldowns.
    fn now(&self) -> Instant;

    /// The current UTC wall-clock time, used for `Incident.timestamp`.
    fn system_now(&self) -> SystemTime;
}

/// Real clock backed by the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn system_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Fake clock for tests: starts at a fixed instant and only advances when
/// told to, via [`FakeClock::advance`].
#[derive(Debug, Clone)]
pub struct FakeClock {
    base_instant: Instant,
    base_system: SystemTime,
    offset_ms: Arc<AtomicU64>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            base_instant: Instant::now(),
            base_system: SystemTime::now(),
            offset_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Advance the fake clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.offset_ms
            .fetch_add(delta.as_millis() as u64, Ordering::SeqCst);
    }

    fn offset(&self) -> Duration {
        Duration::from_millis(self.offset_ms.load(Ordering::SeqCst))
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.base_instant + self.offset()
    }

    fn system_now(&self) -> SystemTime {
        self.base_system + self.offset()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
