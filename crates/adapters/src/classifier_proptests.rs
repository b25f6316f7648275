// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based coverage for the classifier predicates: they are total
//! (never panic), pure (same input always yields the same output), and
//! `is_error_line` specifically is case-insensitive.

use proptest::prelude::*;

use super::*;

proptest! {
    #[test]
    fn p4_predicates_never_panic_on_arbitrary_input(line in ".*") {
        let _ = is_error_line(&line);
        let _ = is_trace_start(&line);
        let _ = is_trace_continuation(&line);
    }

    #[test]
    fn p4_predicates_are_pure(line in ".*") {
        prop_assert_eq!(is_error_line(&line), is_error_line(&line));
        prop_assert_eq!(is_trace_start(&line), is_trace_start(&line));
        prop_assert_eq!(is_trace_continuation(&line), is_trace_continuation(&line));
    }

    // Restricted to printable ASCII: ASCII upper/lowercasing round-trips
    // exactly, which is what makes this property provable rather than
    // merely plausible under Unicode case-folding edge cases.
    #[test]
    fn p4_is_error_line_is_case_insensitive(line in "[ -~]{0,64}") {
        let upper_result = is_error_line(&line.to_uppercase());
        let lower_result = is_error_line(&line.to_lowercase());
        prop_assert_eq!(is_error_line(&line), upper_result);
        prop_assert_eq!(is_error_line(&line), lower_result);
    }
}
