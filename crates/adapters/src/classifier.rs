// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure predicates over a single trimmed log line: is it an error line, does
//! it start a trace, does it continue one.
//!
//! The substring tables below are plain data, not branching code, so new
//! languages or error classes can be added without touching the predicate
//! logic itself.

/// Severity keywords that mark a line as an error, case-insensitive.
const SEVERITY_KEYWORDS: &[&str] = &["ERROR", "FATAL", "CRITICAL", "SEVERE", "EMERGENCY"];

/// Generic exception markers shared across runtimes.
const EXCEPTION_MARKERS: &[&str] = &["EXCEPTION", "PANIC", "TRACEBACK", "UNCAUGHT"];

/// Frame and stack markers that indicate an in-progress or nearby trace.
const FRAME_MARKERS: &[&str] = &[
    "CAUSED BY:",
    "STACK TRACE:",
    "STACKTRACE:",
    "AT COM.",
    "AT ORG.",
    "AT JAVA.",
    "AT SUN.",
    "GOROUTINE",
    "RUNTIME ERROR:",
];

/// Known language-specific error class names, drawn from a representative
/// cross-language set.
const ERROR_CLASS_NAMES: &[&str] = &[
    "NULLPOINTEREXCEPTION",
    "NULLREFERENCEEXCEPTION",
    "NULL CHECK OPERATOR",
    "NONETYPE",
    "TYPEERROR",
    "KEYERROR",
    "ATTRIBUTEERROR",
    "VALUEERROR",
    "OUTOFMEMORYERROR",
    "OUT OF MEMORY",
    "STACKOVERFLOWERROR",
    "STACK OVERFLOW",
    "SYNTAXERROR",
    "PARSEERROR",
    "UNHANDLED PROMISE REJECTION",
    "UNHANDLEDPROMISEREJECTION",
    "SEGMENTATION FAULT",
    "SIGSEGV",
    "SIGABRT",
    "OOM",
];

/// HTTP server-error codes with their canonical reason phrases.
const HTTP_SERVER_ERRORS: &[&str] = &[
    "500 INTERNAL SERVER ERROR",
    "501 NOT IMPLEMENTED",
    "502 BAD GATEWAY",
    "503 SERVICE UNAVAILABLE",
    "504 GATEWAY TIMEOUT",
];

/// Common database failure phrases.
const DATABASE_FAILURES: &[&str] = &["DEADLOCK", "CONNECTION REFUSED", "CONNECTION TIMED OUT"];

/// Substrings that mark the first line of a trace. Matched against the
/// original-case line, unlike the error-line tables above.
const TRACE_START_MARKERS: &[&str] = &[
    "Traceback",
    "Exception in thread",
    "goroutine",
    "panic:",
    "Error:",
    "ERROR:",
    "FATAL:",
    "Caused by:",
    "Stack trace:",
    "Stacktrace:",
    "Unhandled",
    "Thread",
    "Process",
];

/// Leading-text markers that indicate a continuation (frame) line. A bare
/// tab is handled separately since `starts_with('\t')` already subsumes any
/// tab-prefixed variant (e.g. `"\tat "`). Both `File "` and `  File "` are
/// listed since Python traceback frames are conventionally indented by two
/// spaces, not four.
const CONTINUATION_PREFIXES: &[&str] =
    &["at ", "    ", "File \"", "  File \"", "^", "..."];

/// true iff the upper-cased line contains any error-indicating substring.
pub fn is_error_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    SEVERITY_KEYWORDS
        .iter()
        .chain(EXCEPTION_MARKERS)
        .chain(FRAME_MARKERS)
        .chain(ERROR_CLASS_NAMES)
        .chain(HTTP_SERVER_ERRORS)
        .chain(DATABASE_FAILURES)
        .any(|needle| upper.contains(needle))
}

/// true iff the line (original case) marks the start of a trace.
pub fn is_trace_start(line: &str) -> bool {
    TRACE_START_MARKERS.iter().any(|needle| line.contains(needle))
}

/// true iff the line continues an in-progress trace: it's an indented frame,
/// a Python `File "..."` frame, a caret/ellipsis continuation marker, or
/// itself an error line (some runtimes interleave further error lines into
/// a single trace, e.g. "Caused by:" chains).
pub fn is_trace_continuation(line: &str) -> bool {
    if line.starts_with('\t') {
        return true;
    }
    CONTINUATION_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
        || is_error_line(line)
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "classifier_proptests.rs"]
mod proptests;
