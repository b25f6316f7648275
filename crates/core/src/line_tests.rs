// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn trims_trailing_whitespace_only() {
    let line = RawLine::new("  hello world  \n", Instant::now()).unwrap();
    assert_eq!(line.text(), "  hello world");
}

#[test]
fn rejects_empty_after_trim() {
    assert!(RawLine::new("   \n\t", Instant::now()).is_none());
    assert!(RawLine::new("", Instant::now()).is_none());
}

#[test]
fn preserves_leading_indentation_for_frame_lines() {
    let line = RawLine::new("    at com.example.Foo.bar(Foo.java:10)\n", Instant::now()).unwrap();
    assert_eq!(line.text(), "    at com.example.Foo.bar(Foo.java:10)");
}

#[test]
fn preserves_python_frame_indentation() {
    let line = RawLine::new("  File \"python/app.py\", line 45, in calculate\n", Instant::now())
        .unwrap();
    assert_eq!(line.text(), "  File \"python/app.py\", line 45, in calculate");
}
