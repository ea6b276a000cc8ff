//! Output types for sort operations.
//!
//! ## Purpose
//!
//! This module defines the `SortReport` struct which summarizes a sort
//! run: how many passes ran, how many comparisons and exchanges they
//! performed, and whether the run terminated early.
//!
//! ## Design notes
//!
//! * **Informational**: The sorted data lives in the caller's slice; the
//!   report carries only counters.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `passes <= max(len, 1) - 1`.
//! * `swaps <= comparisons`.
//! * `stopped_early` implies the final pass performed zero exchanges.
//!
//! ## Non-goals
//!
//! * This module does not perform the sort; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Report Structure
// ============================================================================

/// Summary of a completed sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    /// Number of elements in the sequence.
    pub len: usize,

    /// Full passes performed over the (shrinking) unsorted prefix.
    pub passes: usize,

    /// Total adjacent-pair comparisons across all passes.
    pub comparisons: usize,

    /// Total exchanges across all passes.
    pub swaps: usize,

    /// Whether the run ended because a full pass performed zero
    /// exchanges (the early-exit optimization).
    pub stopped_early: bool,
}

impl SortReport {
    /// Create an empty report for a sequence of `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            passes: 0,
            comparisons: 0,
            swaps: 0,
            stopped_early: false,
        }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check whether the input was already sorted on entry.
    ///
    /// True exactly when no pass performed an exchange.
    pub fn sorted_on_entry(&self) -> bool {
        self.swaps == 0
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Sort Summary:")?;
        writeln!(f, "  Elements:    {}", self.len)?;
        writeln!(f, "  Passes:      {}", self.passes)?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Exchanges:   {}", self.swaps)?;
        writeln!(
            f,
            "  Early exit:  {}",
            if self.stopped_early { "yes" } else { "no" }
        )
    }
}
