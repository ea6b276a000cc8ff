//! Tests for sequence rendering.
//!
//! These tests verify the diagnostic text form: space-separated decimal
//! values followed by a line terminator.
//!
//! ## Test Organization
//!
//! 1. **Formatting** - separators and terminator
//! 2. **Edge Cases** - empty and singleton sequences
//! 3. **Writer Sink** - the `fmt::Write`-based variant

use core::fmt::Write;

use bubble::prelude::*;

// ============================================================================
// Formatting Tests
// ============================================================================

/// Test the basic rendering shape.
#[test]
fn test_render_basic() {
    assert_eq!(render_sequence(&[1, 2, 3]), "1 2 3\n");
}

/// Test that negative values render with their sign.
#[test]
fn test_render_negative_values() {
    assert_eq!(render_sequence(&[-1, 0, -22]), "-1 0 -22\n");
}

/// Test that no space trails the last value.
#[test]
fn test_render_no_trailing_space() {
    let rendered = render_sequence(&[64, 34, 25, 12, 22, 11, 90]);

    assert_eq!(rendered, "64 34 25 12 22 11 90\n");
    assert!(!rendered.contains(" \n"));
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test the empty sequence.
///
/// Verifies it renders as a bare line terminator.
#[test]
fn test_render_empty() {
    let seq: [i32; 0] = [];

    assert_eq!(render_sequence(&seq), "\n");
}

/// Test the singleton sequence.
#[test]
fn test_render_singleton() {
    assert_eq!(render_sequence(&[42]), "42\n");
}

// ============================================================================
// Writer Sink Tests
// ============================================================================

/// Test writing into an existing buffer.
///
/// Verifies the writer variant appends rather than replaces.
#[test]
fn test_write_sequence_appends() {
    let mut out = String::from("Before: ");

    write_sequence(&mut out, &[5, 4, 3]).unwrap();

    assert_eq!(out, "Before: 5 4 3\n");
}

/// Test chaining two sequences through one sink.
#[test]
fn test_write_sequence_twice() {
    let mut out = String::new();

    write_sequence(&mut out, &[1, 2]).unwrap();
    write!(out, "After:  ").unwrap();
    write_sequence(&mut out, &[2, 1]).unwrap();

    assert_eq!(out, "1 2\nAfter:  2 1\n");
}
