//! High-level API for in-place sorting and matrix transposition.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring the sort engine, a one-shot `sort` convenience,
//! and the validated transpose surface.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `build()` is called;
//!   transpose buffers are validated before the transform runs.
//! * **Type-Safe**: Sorting is generic over `PrimInt` element types.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BubbleBuilder`] via `Bubble::new()`.
//! 2. Chain configuration methods (`.early_exit()`).
//! 3. Call `.build()` to obtain a [`BubbleSort`] engine.
//! 4. Call `.sort(&mut seq)` as many times as needed; the engine is
//!    reusable and stateless between runs.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::transpose::{transpose3, transpose3_into, Matrix3};
pub use crate::engine::output::SortReport;
pub use crate::primitives::errors::SortError;
pub use crate::primitives::render::{render_sequence, write_sequence};

use crate::algorithms::transpose::transpose_rect;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring the sort engine.
#[derive(Debug, Clone, Default)]
pub struct BubbleBuilder {
    /// Terminate once a full pass performs zero exchanges.
    pub early_exit: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl BubbleBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            early_exit: None,
            duplicate_param: None,
        }
    }

    /// Enable or disable the early-exit optimization (default: enabled).
    ///
    /// Disabling it restores the minimal textbook behavior of always
    /// running `n - 1` passes. The resulting order is identical either
    /// way; only the pass and comparison counts differ.
    pub fn early_exit(mut self, enabled: bool) -> Self {
        if self.early_exit.is_some() {
            self.duplicate_param = Some("early_exit");
        }
        self.early_exit = Some(enabled);
        self
    }

    /// Build the sort engine.
    pub fn build(self) -> Result<BubbleSort, SortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mut config = SortConfig::default();
        if let Some(early_exit) = self.early_exit {
            config.early_exit = early_exit;
        }

        Ok(BubbleSort { config })
    }
}

// ============================================================================
// Sort Engine
// ============================================================================

/// In-place adjacent-exchange sort engine.
#[derive(Debug, Clone, Copy)]
pub struct BubbleSort {
    config: SortConfig,
}

impl BubbleSort {
    /// Sort `seq` in place into non-decreasing order.
    ///
    /// The sequence is rearranged as a permutation of itself; element
    /// occurrences are preserved exactly. Sorting an already-sorted
    /// sequence leaves it unchanged. Empty and single-element sequences
    /// return immediately.
    pub fn sort<T: PrimInt>(&self, seq: &mut [T]) -> SortReport {
        SortExecutor::run_with_config(seq, &self.config)
    }
}

/// Sort `seq` in place with the default engine configuration.
pub fn sort<T: PrimInt>(seq: &mut [T]) -> SortReport {
    SortExecutor::run_with_config(seq, &SortConfig::default())
}

// ============================================================================
// Transposition
// ============================================================================

/// Transpose a `rows x cols` row-major slice into `dst`.
///
/// Both `src` and `dst` must hold exactly `rows * cols` elements; `dst`
/// receives the `cols x rows` transpose in row-major order. The input is
/// never aliased by the output.
pub fn transpose_into<T: Copy>(
    src: &[T],
    rows: usize,
    cols: usize,
    dst: &mut [T],
) -> Result<(), SortError> {
    let expected = rows * cols;
    Validator::validate_matrix_buffer(expected, src.len())?;
    Validator::validate_matrix_buffer(expected, dst.len())?;

    transpose_rect(src, rows, cols, dst);
    Ok(())
}
