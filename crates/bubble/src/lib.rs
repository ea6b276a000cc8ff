//! # Bubble — in-place adjacent-exchange sorting for Rust
//!
//! An in-place, ascending, comparison-based sort over mutable integer
//! sequences, implemented as the classic adjacent-exchange (bubble) pass
//! with an optional early-exit optimization, plus a small set of companion
//! array utilities (matrix transposition, sequence rendering).
//!
//! ## What does it do?
//!
//! The sort repeatedly scans adjacent pairs of a shrinking unsorted prefix,
//! exchanging any pair that compares out of order. After each full pass the
//! largest remaining element has settled at the end of the prefix, so the
//! prefix shrinks by one. The sequence is mutated in place; no auxiliary
//! storage proportional to the input is allocated. Alongside the sorted
//! data, the engine returns a [`SortReport`](prelude::SortReport) counting
//! passes, comparisons, and exchanges.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubble::prelude::*;
//!
//! let mut seq = vec![64, 34, 25, 12, 22, 11, 90];
//!
//! // Build the engine
//! let engine = Bubble::new().build()?;
//!
//! // Sort in place
//! let report = engine.sort(&mut seq);
//!
//! assert_eq!(seq, vec![11, 12, 22, 25, 34, 64, 90]);
//! println!("{}", report);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Sort Summary:
//!   Elements:    7
//!   Passes:      6
//!   Comparisons: 21
//!   Exchanges:   14
//!   Early exit:  yes
//! ```
//!
//! ### Disabling the early-exit optimization
//!
//! By default a run terminates once a full pass performs zero exchanges.
//! The minimal textbook behavior (always `n - 1` passes) is still
//! reachable:
//!
//! ```rust
//! use bubble::prelude::*;
//!
//! let mut seq = vec![1, 2, 3, 4, 5];
//! let report = Bubble::new().early_exit(false).build()?.sort(&mut seq);
//!
//! assert_eq!(report.passes, 4);
//! assert_eq!(report.swaps, 0);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### One-shot sorting
//!
//! When no configuration is needed, the free function runs the default
//! engine:
//!
//! ```rust
//! let mut seq = vec![5, 4, 3, 2, 1];
//! bubble::prelude::sort(&mut seq);
//! assert_eq!(seq, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! bubble = { version = "0.1", default-features = false }
//! ```
//!
//! The sort itself allocates nothing; only the optional
//! [`render_sequence`](prelude::render_sequence) helper needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error types and basic utilities.
mod primitives;

// Layer 2: Algorithms - exchange passes and array transforms.
mod algorithms;

// Layer 3: Engine - pass orchestration and reporting.
mod engine;

// High-level fluent API for the sort engine.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        render_sequence, sort, transpose_into, transpose3, transpose3_into,
        BubbleBuilder as Bubble, BubbleSort, Matrix3, SortError, SortReport, write_sequence,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
