// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lines accumulated for the trace currently being collected.

use std::time::Instant;

use crate::line::RawLine;
use crate::MAX_CONTEXT_LINES;

/// The in-progress trace while the reassembler is in its `Collecting` state.
///
/// Non-empty whenever the reassembler considers itself to be collecting;
/// cleared on emission. Capacity is unbounded by construction but guarded by
/// [`MAX_CONTEXT_LINES`] so a pathological producer cannot grow it forever:
/// once the cap is hit, interior lines are dropped, keeping the head (how the
/// trace started) and the tail (how it most recently continued).
#[derive(Debug, Default)]
pub struct TraceAccumulator {
    lines: Vec<RawLine>,
    deadline: Option<Instant>,
}

impl TraceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the accumulator with the head lines collected when a trace
    /// starts, and set the initial deadline.
    pub fn start(&mut self, head: Vec<RawLine>, deadline: Instant) {
        self.lines = head;
        self.truncate_if_needed();
        self.deadline = Some(deadline);
    }

    /// Append a continuation line and push the deadline forward. The
    /// deadline only ever moves forward within a single trace (never
    /// retreats), matching the monotonic-timeout invariant.
    pub fn extend(&mut self, line: RawLine, new_deadline: Instant) {
        self.lines.push(line);
        self.truncate_if_needed();
        self.deadline = Some(match self.deadline {
            Some(current) if current >= new_deadline => current,
            _ => new_deadline,
        });
    }

    fn truncate_if_needed(&mut self) {
        if self.lines.len() <= MAX_CONTEXT_LINES {
            return;
        }
        // Keep the oldest head and the newest tail; the cap is a safety
        // valve, not a legitimate operating mode, so a simple split is fine.
        let keep_head = MAX_CONTEXT_LINES / 2;
        let keep_tail = MAX_CONTEXT_LINES - keep_head;
        let tail_start = self.lines.len() - keep_tail;
        let mut kept: Vec<RawLine> = self.lines[..keep_head].to_vec();
        kept.extend_from_slice(&self.lines[tail_start..]);
        self.lines = kept;
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(d) if now > d)
    }

    pub fn lines(&self) -> &[RawLine] {
        &self.lines
    }

    /// Drain the accumulator, returning its lines and resetting it to empty.
    pub fn take(&mut self) -> Vec<RawLine> {
        self.deadline = None;
        std::mem::take(&mut self.lines)
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
