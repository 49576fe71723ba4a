//! # cie-spectral
//!
//! Reference spectral data and spectral-to-tristimulus integration.
//!
//! A measured reflectance or transmittance curve becomes CIE XYZ by weighting
//! it with an illuminant's spectral power and the observer's color-matching
//! functions, then normalizing so a perfect white reflector has Y = 1.
//!
//! # Grid
//!
//! All built-in tables are sampled from 400 to 700 nm at 10 nm
//! ([`SAMPLE_COUNT`] = 31). Curves must match the grid exactly; there is no
//! resampling.
//!
//! # Usage
//!
//! ```rust
//! use cie_spectral::{SpectralCurve, SpectralTables, SAMPLE_COUNT};
//! use cie_primaries::WhitePoint;
//!
//! let tables = SpectralTables::standard(WhitePoint::D50);
//! let curve = SpectralCurve::constant(SAMPLE_COUNT, 0.5);
//! let xyz = tables.integrate(&curve).unwrap();
//! assert!((xyz.y - 0.5).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - `cie-math` - XYZ triplets
//! - `cie-primaries` - white point tags for illuminants
//! - [`serde`] - tables can be loaded from reference data files
//! - [`thiserror`] - [`SpectralError`]
//!
//! # Used By
//!
//! - `cie-color` - spectral pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod curve;
mod integrate;
pub mod tables;

pub use error::{SpectralError, SpectralResult};
pub use curve::{ColorMatchingFunctions, Illuminant, SpectralCurve};
pub use integrate::{integrate_xyz, SpectralTables};
pub use tables::{DELTA_LAMBDA, SAMPLE_COUNT, START_NM};
