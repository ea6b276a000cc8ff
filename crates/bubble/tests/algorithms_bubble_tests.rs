#![cfg(feature = "dev")]
//! Tests for the exchange pass.
//!
//! These tests verify the single-pass primitive the engine is built from:
//! - Prefix maximum placement
//! - Comparison and exchange accounting
//! - Limit clamping
//!
//! ## Test Organization
//!
//! 1. **Placement** - the prefix maximum settles at the prefix end
//! 2. **Accounting** - per-pass statistics
//! 3. **Limits** - clamping and degenerate prefixes

use bubble::internals::algorithms::bubble::{bubble_pass, PassStats};

// ============================================================================
// Placement Tests
// ============================================================================

/// Test that one pass places the maximum at the end.
#[test]
fn test_pass_places_maximum() {
    let mut seq = vec![64, 34, 25, 12, 22, 11, 90];

    bubble_pass(&mut seq, seq.len());

    assert_eq!(*seq.last().unwrap(), 90);
}

/// Test that a pass over a prefix leaves the suffix untouched.
#[test]
fn test_pass_respects_limit() {
    let mut seq = vec![3, 2, 1, 0, 0];

    bubble_pass(&mut seq, 3);

    assert_eq!(seq, vec![2, 1, 3, 0, 0]);
}

// ============================================================================
// Accounting Tests
// ============================================================================

/// Test the statistics of a fully reversed prefix.
///
/// Every comparison exchanges, so both counters equal `limit - 1`.
#[test]
fn test_pass_stats_reversed() {
    let mut seq = vec![4, 3, 2, 1];

    let stats = bubble_pass(&mut seq, 4);

    assert_eq!(
        stats,
        PassStats {
            comparisons: 3,
            swaps: 3
        }
    );
}

/// Test the statistics of an ordered prefix.
#[test]
fn test_pass_stats_sorted() {
    let mut seq = vec![1, 2, 3, 4];

    let stats = bubble_pass(&mut seq, 4);

    assert_eq!(stats.comparisons, 3);
    assert_eq!(stats.swaps, 0);
}

/// Test that equal elements are never exchanged.
#[test]
fn test_pass_stable_on_equals() {
    let mut seq = vec![7, 7, 7];

    let stats = bubble_pass(&mut seq, 3);

    assert_eq!(stats.swaps, 0);
}

// ============================================================================
// Limit Tests
// ============================================================================

/// Test that an oversized limit is clamped to the slice length.
#[test]
fn test_pass_limit_clamped() {
    let mut seq = vec![2, 1];

    let stats = bubble_pass(&mut seq, 100);

    assert_eq!(seq, vec![1, 2]);
    assert_eq!(stats.comparisons, 1);
}

/// Test degenerate prefixes.
#[test]
fn test_pass_degenerate_prefixes() {
    let mut seq = vec![2, 1];

    assert_eq!(bubble_pass(&mut seq, 0), PassStats::default());
    assert_eq!(bubble_pass(&mut seq, 1), PassStats::default());
    assert_eq!(seq, vec![2, 1]);
}
