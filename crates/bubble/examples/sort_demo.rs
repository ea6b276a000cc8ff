//! Sort Engine Examples
//!
//! This example demonstrates the sort engine:
//! - One-shot sorting with the default configuration
//! - Builder configuration and the run report
//! - Early-exit behavior on already-sorted input

use bubble::prelude::*;

fn main() -> Result<(), SortError> {
    println!("{}", "=".repeat(80));
    println!("Bubble Sort Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_sort()?;
    example_2_configured_engine()?;
    example_3_early_exit()?;

    Ok(())
}

/// Example 1: Basic Sorting
/// The classic fixed sample, printed before and after
fn example_1_basic_sort() -> Result<(), SortError> {
    println!("Example 1: Basic Sorting");
    println!("{}", "-".repeat(80));

    let mut seq = vec![64, 34, 25, 12, 22, 11, 90];

    print!("Before: {}", render_sequence(&seq));
    let report = sort(&mut seq);
    print!("After:  {}", render_sequence(&seq));

    println!("\n{}", report);
    Ok(())
}

/// Example 2: Configured Engine
/// Disables early exit to get the full textbook pass budget
fn example_2_configured_engine() -> Result<(), SortError> {
    println!("Example 2: Configured Engine");
    println!("{}", "-".repeat(80));

    let mut seq = vec![5, 4, 3, 2, 1];

    let engine = Bubble::new().early_exit(false).build()?;
    let report = engine.sort(&mut seq);

    print!("Sorted: {}", render_sequence(&seq));
    println!(
        "Ran {} passes with {} comparisons (full budget).",
        report.passes, report.comparisons
    );

    println!();
    Ok(())
}

/// Example 3: Early Exit
/// A sorted input terminates after a single exchange-free pass
fn example_3_early_exit() -> Result<(), SortError> {
    println!("Example 3: Early Exit");
    println!("{}", "-".repeat(80));

    let mut seq = vec![1, 1, 1];

    let report = Bubble::new().build()?.sort(&mut seq);

    println!(
        "Passes: {}, exchanges: {}, stopped early: {}",
        report.passes, report.swaps, report.stopped_early
    );
    println!("Sorted on entry: {}", report.sorted_on_entry());

    println!();
    Ok(())
}
