// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canned cross-language error bursts (C6). Each template is a tagged
//! variant with fixed arity — a language label, a few normal-looking lines
//! to precede the burst, and the trace itself (trigger line through its
//! final continuation frame) — matched against the classifier's actual
//! substring rules rather than real-world stack trace formatting, since the
//! point is to exercise the Reassembler, not to mimic any one runtime.

/// A single canned burst.
pub struct Template {
    pub name: &'static str,
    pub normal_logs: &'static [&'static str],
    pub trace: &'static [&'static str],
}

const PYTHON: Template = Template {
    name: "python",
    normal_logs: &[
        "[INFO] Handling request GET /api/calculate",
        "[INFO] Validating input parameters",
        "[DEBUG] numerator=10 denominator=0",
    ],
    trace: &[
        "ERROR in app: Exception on /api/calculate [GET]",
        "Traceback (most recent call last):",
        "  File \"python/app.py\", line 45, in calculate",
        "    result = divide(numerator, denominator)",
        "  File \"python/app.py\", line 12, in divide",
        "    return a / b",
        "ZeroDivisionError: division by zero",
    ],
};

const JAVASCRIPT: Template = Template {
    name: "js",
    normal_logs: &[
        "[INFO] Handling request POST /api/users",
        "[DEBUG] Parsing request body",
    ],
    trace: &[
        "ERROR: Unhandled exception processing request",
        "TypeError: Cannot read properties of null (reading 'id')",
        "    at getUserId (/app/src/users.js:22:15)",
        "    at processRequest (/app/src/server.js:88:20)",
        "    at Layer.handle [as handle_request] (/app/node_modules/express/lib/router/layer.js:95:5)",
    ],
};

const GO: Template = Template {
    name: "go",
    normal_logs: &["[INFO] Starting worker pool", "[INFO] Listening on :8080"],
    trace: &[
        "panic: runtime error: invalid memory address or nil pointer dereference",
        "[signal SIGSEGV: segmentation violation code=0x1 addr=0x0 pc=0x47a9b2]",
        "goroutine 1 [running]:",
        "\tmain.process(0x0, 0x0)",
        "\t/app/main.go:42 +0x19",
    ],
};

const JAVA: Template = Template {
    name: "java",
    normal_logs: &["[INFO] Processing batch job", "[DEBUG] Loaded 120 records"],
    trace: &[
        "ERROR com.example.Service - Failed to process record",
        "java.lang.NullPointerException: Cannot invoke \"String.length()\" because \"s\" is null",
        "\tat com.example.Service.process(Service.java:58)",
        "\tat com.example.Worker.run(Worker.java:30)",
        "\tat java.base/java.lang.Thread.run(Thread.java:840)",
    ],
};

const RUST: Template = Template {
    name: "rust",
    normal_logs: &["[INFO] Spawning worker thread", "[DEBUG] Task queue depth: 4"],
    trace: &[
        "thread 'main' panicked at src/main.rs:17:5:",
        "    called `Option::unwrap()` on a `None` value",
        "    stack backtrace:",
        "       0: rust_begin_unwind",
        "       1: core::panicking::panic_fmt",
        "       2: detector::main",
    ],
};

const DART: Template = Template {
    name: "dart",
    normal_logs: &["[INFO] Rendering widget tree", "[DEBUG] Layout pass complete"],
    trace: &[
        "Unhandled exception: Null check operator used on a null value",
        "    #0 main.<anonymous closure> (file:///app/lib/main.dart:10:5)",
        "    #1 _rootRunUnary (dart:async/zone.dart:1434:47)",
        "    #2 _CustomZone.runUnary (dart:async/zone.dart:1335:19)",
    ],
};

/// All templates, in the order covering the six languages the classifier's
/// cross-language heuristics must handle.
pub const TEMPLATES: &[Template] = &[PYTHON, JAVASCRIPT, GO, JAVA, RUST, DART];

/// Find a template by name (as passed to `--burst`), case-insensitive.
pub fn find(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
