//! Matrix transposition into owned or caller-supplied storage.
//!
//! ## Purpose
//!
//! This module transposes row-major matrices. The output always lives in
//! storage whose lifetime is independent of the call: either a freshly
//! constructed owned matrix or a caller-supplied buffer.
//!
//! ## Design notes
//!
//! * **No aliasing**: Owned returns copy out of the input; the buffer
//!   variants take `&`/`&mut` pairs, so input and output storage are
//!   disjoint by construction.
//! * **Unchecked core**: [`transpose_rect`] assumes the shape has already
//!   been validated (API layer's responsibility) and only debug-asserts it.
//!
//! ## Invariants
//!
//! * For a `rows x cols` row-major source, `dst[j * rows + i] == src[i * cols + j]`.
//! * The input matrix is never mutated.
//!
//! ## Non-goals
//!
//! * This module does not validate buffer lengths (handled by the API layer
//!   through the validator).
//! * In-place square transposition is not provided; output storage is
//!   always distinct from the input.

// ============================================================================
// Type Definitions
// ============================================================================

/// A row-major 3x3 matrix.
pub type Matrix3<T> = [[T; 3]; 3];

// ============================================================================
// Fixed-Size Transposition
// ============================================================================

/// Return the transpose of a 3x3 matrix as a freshly constructed value.
#[inline]
pub fn transpose3<T: Copy>(m: &Matrix3<T>) -> Matrix3<T> {
    let mut out = *m;
    transpose3_into(m, &mut out);
    out
}

/// Write the transpose of `m` into caller-supplied storage.
#[inline]
pub fn transpose3_into<T: Copy>(m: &Matrix3<T>, out: &mut Matrix3<T>) {
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = m[j][i];
        }
    }
}

// ============================================================================
// Rectangular Transposition
// ============================================================================

/// Transpose a `rows x cols` row-major slice into `dst`.
///
/// `src` and `dst` must both hold exactly `rows * cols` elements; the
/// destination receives the `cols x rows` transpose in row-major order.
#[inline]
pub fn transpose_rect<T: Copy>(src: &[T], rows: usize, cols: usize, dst: &mut [T]) {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert_eq!(dst.len(), rows * cols);

    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}
