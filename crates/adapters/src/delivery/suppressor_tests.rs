// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use chrono::Utc;
use idt_core::{FakeClock, Incident};

use super::*;

fn incident(error_line: &str, context: &[&str]) -> Incident {
    Incident {
        error_line: error_line.to_string(),
        timestamp: Utc::now(),
        hostname: "host".to_string(),
        repo_url: None,
        context: context.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn first_incident_is_never_a_duplicate() {
    let suppressor = DuplicateSuppressor::new();
    let clock = FakeClock::new();
    let inc = incident("boom", &["boom"]);
    assert!(!suppressor.is_duplicate(&inc, &clock));
}

#[test]
fn identical_incident_within_cooldown_is_a_duplicate() {
    let mut suppressor = DuplicateSuppressor::new();
    let clock = FakeClock::new();
    let inc = incident("boom", &["line1", "line2", "boom"]);

    suppressor.record(&inc, &clock);
    clock.advance(Duration::from_secs(10));

    assert!(suppressor.is_duplicate(&inc, &clock));
}

#[test]
fn identical_incident_after_cooldown_is_not_a_duplicate() {
    let mut suppressor = DuplicateSuppressor::new();
    let clock = FakeClock::new();
    let inc = incident("boom", &["boom"]);

    suppressor.record(&inc, &clock);
    clock.advance(COOLDOWN + Duration::from_secs(1));

    assert!(!suppressor.is_duplicate(&inc, &clock));
}

#[test]
fn differing_error_line_is_not_a_duplicate() {
    let mut suppressor = DuplicateSuppressor::new();
    let clock = FakeClock::new();
    suppressor.record(&incident("boom", &["boom"]), &clock);

    assert!(!suppressor.is_duplicate(&incident("bang", &["bang"]), &clock));
}

#[test]
fn hash_only_considers_first_three_context_lines() {
    let mut suppressor = DuplicateSuppressor::new();
    let clock = FakeClock::new();
    suppressor.record(
        &incident("boom", &["a", "b", "c", "this tail differs"]),
        &clock,
    );

    let later = incident("boom", &["a", "b", "c", "this tail is different too"]);
    assert!(suppressor.is_duplicate(&later, &clock));
}

#[test]
fn differing_within_first_three_context_lines_is_not_a_duplicate() {
    let mut suppressor = DuplicateSuppressor::new();
    let clock = FakeClock::new();
    suppressor.record(&incident("boom", &["a", "b", "c"]), &clock);

    let later = incident("boom", &["a", "b", "different"]);
    assert!(!suppressor.is_duplicate(&later, &clock));
}

#[test]
fn cooldown_boundary_is_exclusive() {
    let mut suppressor = DuplicateSuppressor::new();
    let clock = FakeClock::new();
    let inc = incident("boom", &["boom"]);

    suppressor.record(&inc, &clock);
    clock.advance(COOLDOWN);

    assert!(!suppressor.is_duplicate(&inc, &clock));
}
