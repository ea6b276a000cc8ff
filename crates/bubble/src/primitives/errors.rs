//! Error types for sorting and transposition operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building
//! a sort engine or transposing through caller-supplied storage.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misuse is caught and stored during configuration, surfaced at `build()`.
//! * **No-std**: The type is `core`-only; no allocation is required to construct or format it.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Builder validation**: A parameter configured more than once.
//! 2. **Dimension validation**: A transpose buffer whose length disagrees with the matrix shape.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * The sort operation is total and never constructs these errors.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for engine configuration and transpose buffer validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A matrix buffer length disagrees with the requested shape.
    DimensionMismatch {
        /// Number of elements implied by the shape (`rows * cols`).
        expected: usize,
        /// Number of elements actually provided.
        got: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "Dimension mismatch: shape needs {expected} elements, buffer has {got}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
