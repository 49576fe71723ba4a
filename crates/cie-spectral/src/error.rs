//! Error types for spectral operations.

use thiserror::Error;

/// Spectral integration error.
///
/// Out-of-range sample values (negative reflectance, values above 1) are
/// not errors; they propagate through the integral unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum SpectralError {
    /// A sequence does not have the wavelength grid's sample count.
    #[error("{what} has {actual} samples, expected {expected}")]
    ShapeMismatch {
        /// Which sequence was rejected.
        what: &'static str,
        /// Sample count of the wavelength grid.
        expected: usize,
        /// Sample count received.
        actual: usize,
    },

    /// The normalizer `N = sum(y_bar * I * dl)` is zero or not finite.
    #[error("degenerate normalization: sum(y_bar * illuminant * dl) = {0}")]
    DegenerateNormalization(f64),

    /// Wavelength interval is not a positive finite number.
    #[error("invalid wavelength interval: {0}")]
    InvalidInterval(f64),

    /// Sample text could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),
}

/// Result type for spectral operations.
pub type SpectralResult<T> = Result<T, SpectralError>;
