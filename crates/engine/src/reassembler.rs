// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Idle/Collecting state machine (C4). Driven synchronously, one line
//! at a time, by whatever task owns the Tailer's output.

use std::sync::Arc;
use std::time::Instant;

use idt_adapters::{is_error_line, is_trace_continuation, is_trace_start};
use idt_core::{
    Clock, Incident, RawLine, RollingBuffer, TraceAccumulator, TRACE_DURATION_MS, TRACE_LOOKBACK,
};

/// Which of the two states the Reassembler currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Collecting,
}

/// Owns the Rolling Buffer and the in-progress Trace Accumulator
/// exclusively; the only consumer of its output is whatever forwards the
/// Incidents it emits onto the Incident channel.
pub struct Reassembler {
    buffer: RollingBuffer,
    accumulator: TraceAccumulator,
    state: State,
    hostname: String,
    repo_url: Option<String>,
    clock: Arc<dyn Clock>,
}

impl Reassembler {
    pub fn new(
        buffer_capacity: usize,
        hostname: String,
        repo_url: Option<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            buffer: RollingBuffer::new(buffer_capacity),
            accumulator: TraceAccumulator::new(),
            state: State::Idle,
            hostname,
            repo_url,
            clock,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The instant at which the in-progress trace should time out, if any.
    /// The driving loop uses this to know how long it may wait for the next
    /// line before it must call [`Reassembler::on_timeout`].
    pub fn deadline(&self) -> Option<Instant> {
        self.accumulator.deadline()
    }

    /// Feed the next line to the state machine. Returns an Incident if this
    /// line caused one to be emitted.
    pub fn on_line(&mut self, line: RawLine) -> Option<Incident> {
        let now = self.clock.now();
        match self.state {
            State::Idle => {
                if is_error_line(line.text()) {
                    self.start_trace(line, now);
                    None
                } else {
                    self.buffer.push(line);
                    None
                }
            }
            State::Collecting => {
                if is_trace_continuation(line.text()) {
                    let deadline = now + std::time::Duration::from_millis(TRACE_DURATION_MS);
                    self.accumulator.extend(line, deadline);
                    None
                } else {
                    let incident = self.emit();
                    self.buffer.push(line.clone());
                    if is_error_line(line.text()) {
                        self.start_trace(line, now);
                    }
                    incident
                }
            }
        }
    }

    /// Called by the driving loop when no line arrived before `deadline()`
    /// elapsed. Emits the in-progress trace if it has actually timed out.
    pub fn on_timeout(&mut self) -> Option<Incident> {
        let now = self.clock.now();
        if self.state == State::Collecting && self.accumulator.is_expired(now) {
            self.emit()
        } else {
            None
        }
    }

    /// Start a new trace: find the start index in the Buffer per the
    /// backward-scan algorithm, seed the Accumulator with that slice plus
    /// the trigger line, and enter Collecting.
    fn start_trace(&mut self, trigger: RawLine, now: Instant) {
        let start = self.find_start_index();
        let head = self.buffer.slice_from(start);
        let deadline = now + std::time::Duration::from_millis(TRACE_DURATION_MS);
        self.accumulator.start(head, deadline);
        self.accumulator.extend(trigger, deadline);
        self.state = State::Collecting;
    }

    /// Scan the last `TRACE_LOOKBACK` buffer lines backward; if any
    /// satisfies `isTraceStart`, use the oldest such index. Otherwise fall
    /// back to `max(0, len - TRACE_LOOKBACK)`.
    fn find_start_index(&self) -> usize {
        let len = self.buffer.len();
        let window_start = len.saturating_sub(TRACE_LOOKBACK);

        let mut earliest_marker = None;
        for i in window_start..len {
            if let Some(line) = self.buffer.at(i) {
                if is_trace_start(line.text()) {
                    earliest_marker = Some(i);
                    break;
                }
            }
        }

        earliest_marker.unwrap_or(window_start)
    }

    fn emit(&mut self) -> Option<Incident> {
        let lines = self.accumulator.take();
        self.state = State::Idle;
        Incident::from_context(
            &lines,
            self.hostname.clone(),
            self.repo_url.clone(),
            self.clock.system_now().into(),
        )
    }
}

#[cfg(test)]
#[path = "reassembler_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "reassembler_proptests.rs"]
mod proptests;
