//! Layer 2: Algorithms
//!
//! This layer implements the core logic: the adjacent-exchange pass that
//! the sort is built from, and the matrix transposition transforms. It
//! contains the "business logic" of the crate but is orchestrated by the
//! engine layer.

// Adjacent-exchange pass over an unsorted prefix.
pub mod bubble;

// Matrix transposition into owned or caller-supplied storage.
pub mod transpose;
