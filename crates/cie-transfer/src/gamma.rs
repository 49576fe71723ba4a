//! Pure power-law transfer functions.
//!
//! CIE RGB is encoded with a plain 2.2 power and no linear toe.
//!
//! # Negative input
//!
//! The power is applied as-is. A negative linear channel (an out-of-gamut
//! color) has no real root and yields NaN; callers that need valid device
//! values map the gamut first.

use cie_math::Vec3;

/// Gamma of CIE RGB encoding.
pub const CIE_RGB_GAMMA: f64 = 2.2;

/// EOTF for arbitrary gamma: `v^gamma`
///
/// # Example
///
/// ```rust
/// use cie_transfer::gamma::gamma_eotf;
///
/// let linear = gamma_eotf(0.5, 2.2);
/// assert!((linear - 0.2176).abs() < 1e-4);
/// ```
#[inline]
pub fn gamma_eotf(v: f64, gamma: f64) -> f64 {
    v.powf(gamma)
}

/// OETF for arbitrary gamma: `l^(1/gamma)`
///
/// # Example
///
/// ```rust
/// use cie_transfer::gamma::gamma_oetf;
///
/// let encoded = gamma_oetf(0.2176, 2.2);
/// assert!((encoded - 0.5).abs() < 1e-4);
/// ```
#[inline]
pub fn gamma_oetf(l: f64, gamma: f64) -> f64 {
    l.powf(1.0 / gamma)
}

/// Gamma 2.2 EOTF.
#[inline]
pub fn eotf_22(v: f64) -> f64 {
    gamma_eotf(v, CIE_RGB_GAMMA)
}

/// Gamma 2.2 OETF.
#[inline]
pub fn oetf_22(l: f64) -> f64 {
    gamma_oetf(l, CIE_RGB_GAMMA)
}

/// Applies gamma 2.2 OETF to an RGB triplet.
#[inline]
pub fn oetf_22_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(oetf_22)
}

/// Applies gamma 2.2 EOTF to an RGB triplet.
#[inline]
pub fn eotf_22_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(eotf_22)
}
