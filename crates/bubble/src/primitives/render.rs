//! Sequence-to-text rendering.
//!
//! ## Purpose
//!
//! This module renders a sequence to a human-readable text form for
//! demonstration and logging: space-separated decimal values followed by a
//! line terminator.
//!
//! ## Design notes
//!
//! * **Writer-based**: The core helper targets any [`core::fmt::Write`] sink;
//!   the `String`-returning convenience wraps it.
//! * **Exact**: Values are formatted through their `Display` impl with no
//!   padding or truncation.
//!
//! ## Invariants
//!
//! * An empty sequence renders as a bare line terminator.
//! * Exactly one space separates adjacent values; none trails the last.
//!
//! ## Non-goals
//!
//! * This module does not parse text back into sequences.
//! * This module performs no I/O; callers decide where the text goes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt::{Display, Result, Write};

// ============================================================================
// Rendering Functions
// ============================================================================

/// Write a sequence to `w` as space-separated values plus a newline.
pub fn write_sequence<T: Display, W: Write>(w: &mut W, seq: &[T]) -> Result {
    let mut values = seq.iter();

    if let Some(first) = values.next() {
        write!(w, "{first}")?;
        for value in values {
            write!(w, " {value}")?;
        }
    }

    w.write_char('\n')
}

/// Render a sequence to an owned `String`.
pub fn render_sequence<T: Display>(seq: &[T]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_sequence(&mut out, seq);
    out
}
