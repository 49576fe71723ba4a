//! XYZ <-> companded RGB.
//!
//! An [`RgbProfile`] pairs the linear matrices of a space with its white and
//! companding curve:
//!
//! | Space | White | Encode |
//! |-------|-------|--------|
//! | sRGB | D65 | piecewise sRGB OETF |
//! | CIE RGB | E | `l^(1/2.2)` |
//!
//! Output is scaled to 0-255 and never clamped. CIE RGB has no linear
//! segment, so a negative linear channel (outside the CIE RGB gamut) encodes
//! to NaN; sRGB passes negatives through its linear segment.

use crate::error::{ColorError, ColorResult};
use crate::types::{Rgb255, RgbSpace, Xyz};
use cie_math::{Mat3, Vec3};
use cie_primaries::{
    WhitePoint, CIE_RGB_TO_XYZ, SRGB_TO_XYZ, XYZ_TO_CIE_RGB, XYZ_TO_SRGB,
};
use cie_transfer::{gamma, srgb};
use serde::{Deserialize, Serialize};

/// Full-scale code value.
pub const RGB_SCALE: f64 = 255.0;

/// Matrices and white of a device RGB space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbProfile {
    /// Which space, and therefore which companding curve.
    pub space: RgbSpace,
    /// White point the matrices are relative to.
    pub white: WhitePoint,
    /// Linear RGB to XYZ.
    pub to_xyz: Mat3,
    /// XYZ to linear RGB.
    pub from_xyz: Mat3,
}

impl RgbProfile {
    /// sRGB with the published D65 matrices.
    pub const fn srgb() -> Self {
        Self {
            space: RgbSpace::Srgb,
            white: WhitePoint::D65,
            to_xyz: SRGB_TO_XYZ,
            from_xyz: XYZ_TO_SRGB,
        }
    }

    /// CIE RGB with the published illuminant E matrices.
    pub const fn cie_rgb() -> Self {
        Self {
            space: RgbSpace::CieRgb,
            white: WhitePoint::E,
            to_xyz: CIE_RGB_TO_XYZ,
            from_xyz: XYZ_TO_CIE_RGB,
        }
    }

    /// Built-in profile for a space.
    pub const fn for_space(space: RgbSpace) -> Self {
        match space {
            RgbSpace::Srgb => Self::srgb(),
            RgbSpace::CieRgb => Self::cie_rgb(),
        }
    }

    fn compand(&self, linear: Vec3) -> Vec3 {
        match self.space {
            RgbSpace::Srgb => srgb::oetf_rgb(linear),
            RgbSpace::CieRgb => gamma::oetf_22_rgb(linear),
        }
    }

    fn linearize(&self, encoded: Vec3) -> Vec3 {
        match self.space {
            RgbSpace::Srgb => srgb::eotf_rgb(encoded),
            RgbSpace::CieRgb => gamma::eotf_22_rgb(encoded),
        }
    }

    /// XYZ to companded 0-255 RGB.
    ///
    /// `xyz` must be tagged with [`Self::white`].
    pub fn encode(&self, xyz: Xyz) -> ColorResult<Rgb255> {
        if xyz.white != self.white {
            return Err(ColorError::WhitePointMismatch {
                expected: self.white,
                actual: xyz.white,
            });
        }
        let linear = self.from_xyz * xyz.to_vec3();
        Ok(Rgb255::from_vec3(self.compand(linear) * RGB_SCALE, self.space))
    }

    /// Companded 0-255 RGB back to XYZ under [`Self::white`].
    pub fn decode(&self, rgb: Rgb255) -> ColorResult<Xyz> {
        if rgb.space != self.space {
            return Err(ColorError::SpaceMismatch {
                expected: self.space,
                actual: rgb.space,
            });
        }
        let linear = self.linearize(rgb.to_vec3() / RGB_SCALE);
        Ok(Xyz::from_vec3(self.to_xyz * linear, self.white))
    }
}

/// XYZ (D65) to sRGB with the built-in profile.
///
/// # Example
///
/// ```rust
/// use cie_color::{xyz_to_srgb, Xyz};
/// use cie_color::primaries::WhitePoint;
///
/// let rgb = xyz_to_srgb(Xyz::white_of(WhitePoint::D65)).unwrap();
/// assert!((rgb.r - 255.0).abs() < 0.01);
/// ```
pub fn xyz_to_srgb(xyz: Xyz) -> ColorResult<Rgb255> {
    RgbProfile::srgb().encode(xyz)
}

/// XYZ (E) to CIE RGB with the built-in profile.
pub fn xyz_to_cie_rgb(xyz: Xyz) -> ColorResult<Rgb255> {
    RgbProfile::cie_rgb().encode(xyz)
}

/// sRGB to XYZ (D65) with the built-in profile.
pub fn srgb_to_xyz(rgb: Rgb255) -> ColorResult<Xyz> {
    RgbProfile::srgb().decode(rgb)
}

/// CIE RGB to XYZ (E) with the built-in profile.
pub fn cie_rgb_to_xyz(rgb: Rgb255) -> ColorResult<Xyz> {
    RgbProfile::cie_rgb().decode(rgb)
}
