//! Tagged color values.
//!
//! Each value carries the context its numbers are meaningful in: XYZ and Lab
//! the white point, RGB the color space. Converters check the tag instead of
//! trusting the caller.

use cie_math::Vec3;
use cie_primaries::WhitePoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// CIE XYZ tristimulus values relative to a reference white.
///
/// Scale: Y = 1 for the perfect white reflector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    /// X
    pub x: f64,
    /// Y (relative luminance)
    pub y: f64,
    /// Z
    pub z: f64,
    /// White point these values are expressed under.
    pub white: WhitePoint,
}

impl Xyz {
    /// Creates a tagged value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, white: WhitePoint) -> Self {
        Self { x, y, z, white }
    }

    /// Tags a raw triplet.
    #[inline]
    pub const fn from_vec3(v: Vec3, white: WhitePoint) -> Self {
        Self::new(v.x, v.y, v.z, white)
    }

    /// The untagged triplet.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The reference white itself (Y = 1).
    #[inline]
    pub const fn white_of(white: WhitePoint) -> Self {
        Self::from_vec3(white.xyz(), white)
    }
}

/// CIELAB color relative to a reference white.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness L*, 0 for black and 100 for the reference white.
    pub l: f64,
    /// Green-red opponent axis a*.
    pub a: f64,
    /// Blue-yellow opponent axis b*.
    pub b: f64,
    /// Reference white.
    pub white: WhitePoint,
}

impl Lab {
    /// Creates a tagged value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64, white: WhitePoint) -> Self {
        Self { l, a, b, white }
    }

    /// The untagged (L, a, b) triplet.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.l, self.a, self.b)
    }
}

/// Device RGB spaces handled by the converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RgbSpace {
    /// IEC 61966-2-1 sRGB, D65, piecewise companding.
    Srgb,
    /// CIE 1931 RGB, illuminant E, gamma 2.2.
    CieRgb,
}

impl RgbSpace {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            RgbSpace::Srgb => "sRGB",
            RgbSpace::CieRgb => "CIE RGB",
        }
    }

    /// White the space is defined against.
    pub const fn white(self) -> WhitePoint {
        match self {
            RgbSpace::Srgb => WhitePoint::D65,
            RgbSpace::CieRgb => WhitePoint::E,
        }
    }
}

impl fmt::Display for RgbSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Companded device RGB on the 0-255 scale.
///
/// Channels are real-valued and unclamped: out-of-gamut colors show up as
/// values below 0 or above 255 (or NaN for CIE RGB with negative linear
/// light).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb255 {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Color space of the channels.
    pub space: RgbSpace,
}

impl Rgb255 {
    /// Creates a tagged value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, space: RgbSpace) -> Self {
        Self { r, g, b, space }
    }

    /// sRGB shorthand.
    #[inline]
    pub const fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, RgbSpace::Srgb)
    }

    /// Tags a raw triplet.
    #[inline]
    pub const fn from_vec3(v: Vec3, space: RgbSpace) -> Self {
        Self::new(v.x, v.y, v.z, space)
    }

    /// The untagged triplet.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// True if every channel lies within 0..=255.
    ///
    /// Converters never clamp; this lets callers decide what to do with
    /// out-of-gamut results.
    pub fn in_gamut(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=255.0).contains(c))
    }
}
