//! Pass orchestration for the sort.
//!
//! ## Purpose
//!
//! This module provides the execution engine that drives the sort: it runs
//! exchange passes over a shrinking unsorted prefix, aggregates the pass
//! statistics, and detects early termination when a full pass performs
//! zero exchanges.
//!
//! ## Design notes
//!
//! * The pass budget is `n - 1`; after each pass the largest remaining
//!   element has settled, so the scanned prefix shrinks by one.
//! * Early exit is a pure performance optimization; it never changes the
//!   resulting order.
//! * Generic over `PrimInt` types.
//!
//! ## Invariants
//!
//! * On return the sequence is in non-decreasing order.
//! * The sequence is a permutation of its input (passes only exchange).
//! * Sequences of length 0 or 1 run zero passes.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`
//!   at build time).
//! * This module performs no I/O and no allocation.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::bubble::bubble_pass;
use crate::engine::output::SortReport;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for sort execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Terminate once a full pass performs zero exchanges.
    pub early_exit: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Execution engine for in-place adjacent-exchange sorting.
pub struct SortExecutor;

impl SortExecutor {
    /// Sort `seq` in place under `config`, returning the run summary.
    pub fn run_with_config<T: PrimInt>(seq: &mut [T], config: &SortConfig) -> SortReport {
        let n = seq.len();
        let mut report = SortReport::new(n);

        if n < 2 {
            return report;
        }

        for pass in 0..n - 1 {
            // The last `pass` positions already hold their final elements.
            let stats = bubble_pass(seq, n - pass);

            report.passes += 1;
            report.comparisons += stats.comparisons;
            report.swaps += stats.swaps;

            if config.early_exit && stats.swaps == 0 {
                report.stopped_early = true;
                break;
            }
        }

        report
    }
}
