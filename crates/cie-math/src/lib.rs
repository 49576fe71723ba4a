//! # cie-math
//!
//! Fixed-size linear algebra for colorimetric transforms.
//!
//! This crate provides the primitives every other `cie-*` crate builds on:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ conversion and chromatic adaptation
//! - [`Vec3`] - 3-component vectors for XYZ, RGB and Lab triplets
//! - Bradford chromatic adaptation, both precomputed per direction and derived
//!
//! # Design
//!
//! All values are `f64`. Reference-grade conversions (instrument readings,
//! calibration targets) are pinned to 7 significant digits, which `f32` cannot
//! carry through a multi-stage chain.
//!
//! Matrices are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use cie_math::{Mat3, Vec3};
//!
//! // sRGB (linear) to XYZ, D65
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - matrix inversion and interop
//! - [`serde`] - matrices and vectors appear in reference data files
//!
//! # Used By
//!
//! - `cie-primaries` - RGB/XYZ matrix derivation
//! - `cie-color` - converters and chromatic adaptation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;
mod adapt;

pub use mat3::*;
pub use vec3::*;
pub use adapt::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
