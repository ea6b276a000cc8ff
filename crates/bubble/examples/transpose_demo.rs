//! Matrix Transposition Examples
//!
//! This example demonstrates the transpose surface:
//! - Owned-return 3x3 transposition
//! - Caller-supplied storage for rectangular matrices

use bubble::prelude::*;

fn main() -> Result<(), SortError> {
    println!("{}", "=".repeat(80));
    println!("Matrix Transposition Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_owned_3x3();
    example_2_rectangular()?;

    Ok(())
}

/// Example 1: Owned 3x3 Transpose
/// The result is freshly constructed storage, independent of the input
fn example_1_owned_3x3() {
    println!("Example 1: Owned 3x3 Transpose");
    println!("{}", "-".repeat(80));

    let m: Matrix3<i32> = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    let t = transpose3(&m);

    println!("Input rows:");
    for row in &m {
        print!("  {}", render_sequence(row));
    }
    println!("Transposed rows:");
    for row in &t {
        print!("  {}", render_sequence(row));
    }

    println!();
}

/// Example 2: Rectangular Transpose
/// A 2x3 row-major slice transposed into a caller-supplied buffer
fn example_2_rectangular() -> Result<(), SortError> {
    println!("Example 2: Rectangular Transpose");
    println!("{}", "-".repeat(80));

    let src = [1, 2, 3, 4, 5, 6];
    let mut dst = [0; 6];

    transpose_into(&src, 2, 3, &mut dst)?;

    print!("2x3 source:    {}", render_sequence(&src));
    print!("3x2 transpose: {}", render_sequence(&dst));

    println!();
    Ok(())
}
