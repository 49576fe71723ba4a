//! # cie-transfer
//!
//! Companding functions for colorimetric conversions.
//!
//! Companding converts between linear light values and encoded values:
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Supported Functions
//!
//! | Function | Use Case | Shape |
//! |----------|----------|-------|
//! | [`srgb`] | sRGB device values | linear toe + 1/2.4 power |
//! | [`gamma`] | CIE RGB (gamma 2.2) | pure power |
//! | [`lab`] | CIELAB lightness/opponent axes | linear toe + cube root |
//!
//! None of these clamp: inputs outside [0, 1] are passed through the same
//! formula, so out-of-gamut values stay visible to the caller.
//!
//! # Usage
//!
//! ```rust
//! use cie_transfer::{srgb, gamma, lab};
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! let cie = gamma::oetf_22(0.18);
//! let f = lab::f(0.18);
//! ```
//!
//! # Dependencies
//!
//! - `cie-math` - triplet helpers
//!
//! # Used By
//!
//! - `cie-color` - Lab and RGB converters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;
pub mod gamma;
pub mod lab;

// Re-export common functions
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
pub use gamma::{gamma_eotf, gamma_oetf};
pub use lab::{f as lab_f, f_inv as lab_f_inv};
