//! Scalar and Slice Tour
//!
//! A demonstration script with no tested contract: a quick tour of the
//! integer widths, string handling, and slice basics used throughout the
//! crate's element domain.

use std::env;
use std::mem::size_of;

const MAX: usize = 20;

fn main() {
    let args: Vec<String> = env::args().collect();
    println!("argc: {}", args.len());
    println!("argv[0]: {}", args[0]);
    println!();

    // Signed integers
    println!("Size of i8:  {} byte", size_of::<i8>());
    println!("Size of i16: {} bytes", size_of::<i16>());
    println!("Size of i32: {} bytes", size_of::<i32>());
    println!("Size of i64: {} bytes", size_of::<i64>());

    // Unsigned integers
    println!("Size of u8:  {} byte", size_of::<u8>());
    println!("Size of u16: {} bytes", size_of::<u16>());
    println!("Size of u32: {} bytes", size_of::<u32>());
    println!("Size of u64: {} bytes", size_of::<u64>());

    // Floating point
    println!("Size of f32: {} bytes", size_of::<f32>());
    println!("Size of f64: {} bytes", size_of::<f64>());
    println!();

    // Strings
    let first: &str = "First String";
    println!("First String: {first}");

    let mut second = String::with_capacity(MAX);
    second.push_str("Second String");
    println!("Second String: {second}");
    println!("Second String (first 4 chars): {}", &second[..4]);
    println!("Second String (min width 20): {second:>20}");
    println!("Capacity of Second String: {}", second.capacity());
    println!("Length of Second String: {}", second.len());

    for (i, c) in first.chars().enumerate() {
        println!("First String[{i}]: {c}");
    }
    println!();

    // Slices
    let first_vector = [1, 2, 3, 4, 5];
    println!("First Vector[0]: {}", first_vector[0]);

    print!("Entire First Vector: ");
    for value in &first_vector {
        print!("{value} ");
    }
    println!();

    let mut second_vector = [0; MAX];
    second_vector[..5].copy_from_slice(&first_vector);
    println!("Second Vector[0]: {}", second_vector[0]);
}
