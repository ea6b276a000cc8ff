//! Validation for engine configuration and transpose buffers.
//!
//! ## Purpose
//!
//! This module provides the validation functions used at the API boundary:
//! builder configuration checks and matrix buffer dimension checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Total core**: The sort itself accepts every finite sequence, so
//!   there is deliberately no input-data validation here.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for configuration and buffer shapes.
///
/// Provides static methods returning `Result<(), SortError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SortError> {
        if let Some(parameter) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    /// Validate that a matrix buffer holds exactly `expected` elements.
    pub fn validate_matrix_buffer(expected: usize, got: usize) -> Result<(), SortError> {
        if got != expected {
            return Err(SortError::DimensionMismatch { expected, got });
        }
        Ok(())
    }
}
