//! # cie-primaries
//!
//! Reference white points, RGB primaries, and RGB-XYZ matrices.
//!
//! An RGB space here is three xy chromaticities and a named white. Equal
//! RGB components land on that white, which fixes the 3x3 matrix to XYZ
//! ([`rgb_to_xyz_matrix`]). The published 7-digit matrices are kept as
//! constants since the conversion chain is pinned to them.
//!
//! # Spaces
//!
//! | Space | Primaries | White | Companding |
//! |-------|-----------|-------|------------|
//! | sRGB | Rec.709 | D65 | sRGB piecewise |
//! | CIE RGB | 700 / 546.1 / 435.8 nm | E | gamma 2.2 |
//!
//! # Usage
//!
//! ```rust
//! use cie_primaries::{SRGB, WhitePoint, rgb_to_xyz_matrix};
//! use cie_math::Vec3;
//!
//! let matrix = rgb_to_xyz_matrix(&SRGB).unwrap();
//! let white = matrix * Vec3::ONE;
//! assert!((white.x - WhitePoint::D65.xyz().x).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - `cie-math` - `Vec3` / `Mat3`
//! - [`serde`] - white point names in reference data files
//!
//! # Used By
//!
//! - `cie-color` - tagged conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use cie_math::{Mat3, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The white an XYZ or Lab value is relative to.
///
/// Values under different whites are only comparable after adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WhitePoint {
    /// D50, used for Lab.
    D50,
    /// D65, used for sRGB.
    D65,
    /// Equal energy, used for CIE RGB.
    E,
}

impl WhitePoint {
    /// Every variant.
    pub const ALL: [WhitePoint; 3] = [WhitePoint::D50, WhitePoint::D65, WhitePoint::E];

    /// Tristimulus values, Y = 1.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        match self {
            WhitePoint::D50 => cie_math::D50,
            WhitePoint::D65 => cie_math::D65,
            WhitePoint::E => cie_math::E,
        }
    }

    /// Chromaticity `(x, y)`.
    pub fn xy(self) -> (f64, f64) {
        let w = self.xyz();
        let sum = w.dot(Vec3::ONE);
        (w.x / sum, w.y / sum)
    }

    /// "D50", "D65" or "E".
    pub const fn name(self) -> &'static str {
        match self {
            WhitePoint::D50 => "D50",
            WhitePoint::D65 => "D65",
            WhitePoint::E => "E",
        }
    }
}

impl fmt::Display for WhitePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chromaticities of an RGB space.
///
/// The white is a [`WhitePoint`] rather than raw xy so a derived matrix
/// sends RGB (1, 1, 1) exactly to `w.xyz()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red xy
    pub r: (f64, f64),
    /// Green xy
    pub g: (f64, f64),
    /// Blue xy
    pub b: (f64, f64),
    /// White
    pub w: WhitePoint,
    /// Display name
    pub name: &'static str,
}

/// Rec.709 primaries as used by sRGB.
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: WhitePoint::D65,
    name: "sRGB",
};

/// CIE 1931 RGB: spectral lines at 700, 546.1 and 435.8 nm.
pub const CIE_RGB: Primaries = Primaries {
    r: (0.7350, 0.2650),
    g: (0.2740, 0.7170),
    b: (0.1670, 0.0090),
    w: WhitePoint::E,
    name: "CIE RGB",
};

// ============================================================================
// Derived matrices
// ============================================================================

/// XYZ at Y = 1 for chromaticity `(x, y)`.
fn unit_xyz((x, y): (f64, f64)) -> Option<Vec3> {
    (y.abs() >= 1e-12).then(|| Vec3::new(x, y, 1.0 - x - y) / y)
}

/// Linear RGB to XYZ for `primaries`.
///
/// Each primary column is scaled so that the columns sum to the white.
/// `None` when a primary has y = 0 or the three are collinear.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Option<Mat3> {
    let cols = [primaries.r, primaries.g, primaries.b].map(unit_xyz);
    let [r, g, b] = [cols[0]?, cols[1]?, cols[2]?];
    let gain = Mat3::from_col_vecs(r, g, b).inverse()? * primaries.w.xyz();
    Some(Mat3::from_col_vecs(r * gain.x, g * gain.y, b * gain.z))
}

/// XYZ to linear RGB for `primaries`, the inverse of
/// [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Option<Mat3> {
    rgb_to_xyz_matrix(primaries)?.inverse()
}

// ============================================================================
// Published matrices
// ============================================================================

/// Linear sRGB to XYZ (D65).
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) to linear sRGB.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Linear CIE RGB to XYZ (E).
pub const CIE_RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4887180, 0.3106803, 0.2006017],
    [0.1762044, 0.8129847, 0.0108109],
    [0.0000000, 0.0102048, 0.9897952],
]);

/// XYZ (E) to linear CIE RGB.
pub const XYZ_TO_CIE_RGB: Mat3 = Mat3::from_rows([
    [2.3706743, -0.9000405, -0.4706338],
    [-0.5138850, 1.4253036, 0.0885814],
    [0.0052982, -0.0146949, 1.0093968],
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_matrix_matches_constant() {
        let m = rgb_to_xyz_matrix(&SRGB).unwrap();
        assert!(m.max_abs_diff(&SRGB_TO_XYZ) < 1e-5);
        let inv = xyz_to_rgb_matrix(&SRGB).unwrap();
        assert!(inv.max_abs_diff(&XYZ_TO_SRGB) < 1e-5);
    }

    #[test]
    fn test_cie_rgb_matrix_matches_constant() {
        let m = rgb_to_xyz_matrix(&CIE_RGB).unwrap();
        assert!(m.max_abs_diff(&CIE_RGB_TO_XYZ) < 1e-5);
        let inv = xyz_to_rgb_matrix(&CIE_RGB).unwrap();
        assert!(inv.max_abs_diff(&XYZ_TO_CIE_RGB) < 1e-5);
    }

    #[test]
    fn test_white_maps_to_white_point() {
        for space in [SRGB, CIE_RGB] {
            let m = rgb_to_xyz_matrix(&space).unwrap();
            let white = m * Vec3::ONE;
            assert!(
                white.max_abs_diff(space.w.xyz()) < 1e-9,
                "{} white = {:?}",
                space.name,
                white
            );
        }
    }

    #[test]
    fn test_constant_pairs_are_near_inverses() {
        let srgb = SRGB_TO_XYZ * XYZ_TO_SRGB;
        assert!(srgb.max_abs_diff(&Mat3::IDENTITY) < 1e-6);
        let cie = CIE_RGB_TO_XYZ * XYZ_TO_CIE_RGB;
        assert!(cie.max_abs_diff(&Mat3::IDENTITY) < 1e-6);
    }

    #[test]
    fn test_degenerate_primaries() {
        let flat = Primaries {
            r: (0.3, 0.0),
            ..SRGB
        };
        assert!(rgb_to_xyz_matrix(&flat).is_none());
    }

    #[test]
    fn test_white_point_chromaticity() {
        let (x, y) = WhitePoint::E.xy();
        assert!((x - 1.0 / 3.0).abs() < 1e-12);
        assert!((y - 1.0 / 3.0).abs() < 1e-12);
        let (x, y) = WhitePoint::D65.xy();
        assert!((x - 0.3127).abs() < 1e-4);
        assert!((y - 0.3290).abs() < 1e-4);
    }

    #[test]
    fn test_white_point_serde() {
        let w: WhitePoint = serde_json::from_str("\"D50\"").unwrap();
        assert_eq!(w, WhitePoint::D50);
        assert_eq!(w.to_string(), "D50");
    }
}
