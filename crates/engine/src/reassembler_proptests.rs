// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based coverage for the state machine's two cross-cutting
//! invariants: every input line survives somewhere in the machine's output,
//! and every emitted Incident's error line is its own last context line.

use std::sync::Arc;
use std::time::Instant;

use idt_core::{FakeClock, RawLine};
use proptest::prelude::*;

use super::*;

#[derive(Debug, Clone)]
enum Kind {
    Benign,
    Trigger,
    Frame,
}

fn kind_strategy() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::Benign), Just(Kind::Trigger), Just(Kind::Frame)]
}

fn raw(text: String) -> RawLine {
    RawLine::new(text, Instant::now()).expect("generated text is never empty")
}

proptest! {
    // Bounded well under the 50-line buffer capacity used below so no input
    // line is ever evicted before it can be accounted for.
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn p2_every_incident_error_line_is_its_last_context_line(
        kinds in proptest::collection::vec(kind_strategy(), 1..40)
    ) {
        let clock = Arc::new(FakeClock::new());
        let mut r = Reassembler::new(50, "host".to_string(), None, clock);

        let mut input = Vec::new();
        for (i, kind) in kinds.iter().enumerate() {
            input.push(match kind {
                Kind::Benign => format!("LINE-{i}"),
                Kind::Trigger => format!("ERROR-{i}: boom"),
                Kind::Frame => format!("    FRAME-{i}"),
            });
        }
        input.push("CLOSING-SENTINEL".to_string());

        for text in &input {
            if let Some(incident) = r.on_line(raw(text.clone())) {
                prop_assert!(!incident.context.is_empty());
                prop_assert_eq!(&incident.error_line, incident.context.last().unwrap());
            }
        }
    }

    #[test]
    fn p1_no_input_line_is_silently_lost(
        kinds in proptest::collection::vec(kind_strategy(), 1..40)
    ) {
        let clock = Arc::new(FakeClock::new());
        let mut r = Reassembler::new(50, "host".to_string(), None, clock);

        let mut input = Vec::new();
        for (i, kind) in kinds.iter().enumerate() {
            input.push(match kind {
                Kind::Benign => format!("LINE-{i}"),
                Kind::Trigger => format!("ERROR-{i}: boom"),
                Kind::Frame => format!("    FRAME-{i}"),
            });
        }
        // Always close on a benign line so a trailing Collecting accumulator
        // never disappears from the reachable-output set entirely.
        input.push("CLOSING-SENTINEL".to_string());

        let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
        for text in &input {
            if let Some(incident) = r.on_line(raw(text.clone())) {
                seen.extend(incident.context.into_iter());
            }
        }
        // Each generated line's text is unique within a single case, so set
        // membership faithfully answers "did this line end up somewhere".
        // Lines pulled into an Incident's lookback head are also retained in
        // the Buffer (slice_from does not drain it) — that overlap is by
        // design, not loss, so this only asserts the weaker "no loss" half
        // of the property rather than exact-partition "no duplication".
        seen.extend(r.buffer.slice_from(0).iter().map(|l| l.text().to_string()));

        for text in &input {
            prop_assert!(seen.contains(text), "line {text:?} missing from buffer and every incident context");
        }
    }
}
