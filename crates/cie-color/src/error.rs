//! Error types for color operations.
//!
//! Every conversion checks its preconditions at entry and returns the first
//! violation; there is no partial result. Out-of-range values (negative
//! reflectance, RGB outside 0-255) are not errors and propagate through the
//! math unchanged.

use crate::types::RgbSpace;
use cie_primaries::WhitePoint;
use cie_spectral::SpectralError;
use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    /// Spectral integration rejected its input or tables.
    #[error(transparent)]
    Spectral(#[from] SpectralError),

    /// A tristimulus value is tagged with a different white point than the
    /// operation requires. Adapt it first.
    #[error("white point mismatch: expected XYZ under {expected}, got {actual}")]
    WhitePointMismatch {
        /// White point the operation needs.
        expected: WhitePoint,
        /// White point of the value supplied.
        actual: WhitePoint,
    },

    /// No adaptation matrix is stored for the requested direction.
    #[error("no adaptation matrix for {from} -> {to}")]
    MissingAdaptation {
        /// Source white point.
        from: WhitePoint,
        /// Destination white point.
        to: WhitePoint,
    },

    /// An RGB value belongs to a different space than the converter.
    #[error("RGB space mismatch: expected {expected}, got {actual}")]
    SpaceMismatch {
        /// Space the converter handles.
        expected: RgbSpace,
        /// Space of the value supplied.
        actual: RgbSpace,
    },

    /// Matrix operation failed (singular, numerical instability).
    #[error("matrix error: {0}")]
    MatrixError(String),

    /// Reference data is internally inconsistent.
    #[error("invalid reference data: {0}")]
    InvalidReference(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
