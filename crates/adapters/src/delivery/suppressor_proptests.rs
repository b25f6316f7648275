// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based coverage for the duplicate-suppression gate: of any two
//! structurally identical Incidents emitted within the cooldown window,
//! exactly one survives to be sent.

use chrono::Utc;
use idt_core::{FakeClock, Incident};
use proptest::prelude::*;

use super::*;

fn incident(error_line: &str, context: Vec<String>) -> Incident {
    Incident {
        error_line: error_line.to_string(),
        timestamp: Utc::now(),
        hostname: "host".to_string(),
        repo_url: None,
        context,
    }
}

proptest! {
    #[test]
    fn p3_exactly_one_of_two_identical_incidents_survives_within_cooldown(
        error_line in "[a-zA-Z0-9: ]{1,40}",
        extra_context in proptest::collection::vec("[a-zA-Z0-9 ]{0,20}", 0..3),
        elapsed_ms in 0u64..COOLDOWN.as_millis() as u64,
    ) {
        let mut context = extra_context;
        context.push(error_line.clone());
        let first = incident(&error_line, context.clone());
        let second = incident(&error_line, context);

        let clock = FakeClock::new();
        let mut suppressor = DuplicateSuppressor::new();

        let mut survivors = 0;
        if !suppressor.is_duplicate(&first, &clock) {
            suppressor.record(&first, &clock);
            survivors += 1;
        }

        clock.advance(std::time::Duration::from_millis(elapsed_ms));

        if !suppressor.is_duplicate(&second, &clock) {
            suppressor.record(&second, &clock);
            survivors += 1;
        }

        prop_assert_eq!(survivors, 1);
    }
}
