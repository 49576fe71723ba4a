//! # cie-color
//!
//! Colorimetric conversions between spectral data, CIE XYZ, CIELAB, sRGB
//! and CIE RGB.
//!
//! Values carry their context: [`Xyz`] and [`Lab`] are tagged with a
//! [`WhitePoint`](primaries::WhitePoint), [`Rgb255`] with an [`RgbSpace`].
//! Converters reject mismatched tags instead of silently mixing whites.
//!
//! # Architecture
//!
//! ```text
//!                    cie-color
//!                        |
//!     +------------------+------------------+
//!     |                  |                  |
//! cie-transfer    cie-primaries       cie-spectral
//!     |                  |                  |
//!     +--------+---------+------------------+
//!              |
//!          cie-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use cie_color::prelude::*;
//!
//! let data = ReferenceData::standard();
//!
//! // sRGB code values to CIELAB (D50)
//! let lab = srgb_to_lab(Rgb255::srgb(176.8792173, 165.8431174, 9.550607287), &data).unwrap();
//! assert!((lab.l - 67.3255).abs() < 1e-3);
//!
//! // Reflectance curve through every stage
//! let pipeline = SpectralPipeline::new(&data).unwrap();
//! let report = pipeline.convert(&SpectralCurve::constant(SAMPLE_COUNT, 0.5)).unwrap();
//! assert_eq!(report.lab.white, WhitePoint::D50);
//! ```
//!
//! # Reference Data
//!
//! | Table | Default |
//! |-------|---------|
//! | Illuminant | D50, 400-700 nm at 10 nm |
//! | Observer | CIE 1931 2° |
//! | Lab white | D50 |
//! | sRGB | IEC 61966-2-1 matrices, D65 |
//! | CIE RGB | CIE 1931 RGB matrices, E |
//! | Adaptation | Bradford, D50 <-> D65, D50 <-> E |
//!
//! All of it lives in [`ReferenceData`], which the pipelines take by
//! reference. There are no global tables.
//!
//! # Dependencies
//!
//! - `cie-math` - Vec3, Mat3, Bradford matrices
//! - `cie-transfer` - sRGB, gamma and Lab companding
//! - `cie-primaries` - White points and RGB/XYZ matrices
//! - `cie-spectral` - Spectral integration
//! - [`serde`] - Reference data and results are (de)serializable
//! - [`thiserror`] - Error types
//!
//! # Used By
//!
//! - `cie-cli` - Command line tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod types;
pub mod adapt;
pub mod lab;
pub mod rgb;
pub mod reference;
pub mod pipeline;

pub use error::{ColorError, ColorResult};
pub use types::{Lab, Rgb255, RgbSpace, Xyz};
pub use adapt::{adapt, AdaptationMatrix, Adaptations};
pub use lab::{lab_to_xyz, xyz_to_lab};
pub use rgb::{cie_rgb_to_xyz, srgb_to_xyz, xyz_to_cie_rgb, xyz_to_srgb, RgbProfile};
pub use reference::ReferenceData;
pub use pipeline::{
    lab_to_srgb, srgb_to_lab, srgb_to_lab_report, SpectralPipeline, SpectralReport, SrgbReport,
};

// Re-export sub-crates for convenience
pub use cie_math as math;
pub use cie_primaries as primaries;
pub use cie_spectral as spectral;
pub use cie_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        adapt, lab_to_srgb, lab_to_xyz, srgb_to_lab, srgb_to_xyz, xyz_to_cie_rgb, xyz_to_lab,
        xyz_to_srgb, AdaptationMatrix, Adaptations, ColorError, ColorResult, Lab, ReferenceData,
        Rgb255, RgbProfile, RgbSpace, SpectralPipeline, SpectralReport, Xyz,
    };

    pub use cie_math::{Mat3, Vec3};
    pub use cie_primaries::WhitePoint;
    pub use cie_spectral::{SpectralCurve, SpectralTables, SAMPLE_COUNT};
}
