// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    error_keyword = { "ERROR: something went wrong" },
    fatal_keyword = { "FATAL: disk full" },
    critical_lowercase = { "critical failure in subsystem" },
    severe_mixed_case = { "SeVeRe condition detected" },
    exception_marker = { "Unhandled Exception occurred" },
    panic_marker = { "thread panicked at" },
    traceback_marker = { "Traceback (most recent call last):" },
    uncaught_marker = { "Uncaught TypeError" },
    java_frame = { "    at com.example.Service.run(Service.java:42)" },
    go_goroutine = { "goroutine 1 [running]:" },
    go_runtime_error = { "runtime error: invalid memory address" },
    python_zero_division = { "ZeroDivisionError: division by zero" },
    python_key_error = { "KeyError: 'missing'" },
    python_attribute_error = { "AttributeError: 'NoneType' object has no attribute 'x'" },
    js_type_error = { "TypeError: Cannot read property 'foo' of undefined" },
    js_unhandled_rejection = { "UnhandledPromiseRejection: something failed" },
    java_npe = { "NullPointerException: null" },
    dart_null_check = { "Null check operator used on a null value" },
    oom = { "java.lang.OutOfMemoryError: Java heap space" },
    stack_overflow = { "StackOverflowError" },
    segfault = { "Segmentation fault (core dumped)" },
    sigsegv = { "Process terminated by SIGSEGV" },
    sigabrt = { "received SIGABRT" },
    http_500 = { "responded with 500 Internal Server Error" },
    http_503 = { "503 Service Unavailable" },
    db_deadlock = { "deadlock detected while updating row" },
    db_connection_refused = { "dial tcp: connection refused" },
    db_connection_timeout = { "connection timed out after 30s" },
)]
fn recognizes_error_lines_across_languages(line: &str) {
    assert!(is_error_line(line), "expected error line: {line}");
}

#[yare::parameterized(
    plain_info = { "[INFO] server listening on :8080" },
    plain_debug = { "[DEBUG] cache hit for key=foo" },
    healthy_status = { "health check passed" },
    generic_log = { "user logged in successfully" },
)]
fn benign_lines_are_not_error_lines(line: &str) {
    assert!(!is_error_line(line), "did not expect error line: {line}");
}

#[test]
fn is_error_line_is_case_insensitive() {
    assert!(is_error_line("error in handler"));
    assert!(is_error_line("ERROR IN HANDLER"));
    assert!(is_error_line("Error In Handler"));
}

#[yare::parameterized(
    traceback = { "Traceback (most recent call last):" },
    exception_in_thread = { "Exception in thread \"main\"" },
    goroutine = { "goroutine 1 [running]:" },
    panic_colon = { "panic: runtime error: invalid memory address" },
    error_colon_upper = { "ERROR: connection lost" },
    error_colon_titlecase = { "Error: connection lost" },
    fatal_colon = { "FATAL: out of memory" },
    caused_by = { "Caused by: java.lang.RuntimeException" },
    stack_trace = { "Stack trace:" },
    stacktrace = { "Stacktrace:" },
    unhandled = { "Unhandled exception has occurred" },
    thread_marker = { "Thread-7 \"worker\" prio=5" },
    process_marker = { "Process finished with exit code 1" },
)]
fn recognizes_trace_start_markers(line: &str) {
    assert!(is_trace_start(line), "expected trace start: {line}");
}

#[test]
fn benign_line_is_not_a_trace_start() {
    assert!(!is_trace_start("[INFO] request completed in 12ms"));
}

#[yare::parameterized(
    java_frame = { "    at com.example.Service.run(Service.java:42)" },
    frame_with_at_prefix_no_indent = { "at some.Module.call" },
    tab_indented = { "\tat main.main()" },
    four_space_indent = { "    result = divide(numerator, denominator)" },
    python_file_frame = { "  File \"python/app.py\", line 45, in calculate" },
    caret_marker = { "^" },
    ellipsis_marker = { "..." },
    embedded_error_line_continues_trace = { "Caused by: java.lang.NullPointerException" },
)]
fn recognizes_trace_continuations(line: &str) {
    assert!(is_trace_continuation(line), "expected continuation: {line}");
}

#[yare::parameterized(
    unindented_plain_text = { "this is just some output" },
    info_log_line = { "[INFO] Health check passed" },
)]
fn benign_lines_do_not_continue_a_trace(line: &str) {
    assert!(!is_trace_continuation(line), "did not expect continuation: {line}");
}

#[test]
fn predicates_are_pure_and_repeatable() {
    let line = "Traceback (most recent call last):";
    for _ in 0..5 {
        assert!(is_trace_start(line));
        assert!(is_error_line(line));
        assert!(is_trace_continuation(line));
    }
}
