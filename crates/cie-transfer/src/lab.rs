//! CIELAB companding.
//!
//! The Lab axes apply a cube root to white-relative tristimulus values, with
//! a linear segment near black so the slope stays finite at zero.
//!
//! The break point and slope are the rounded CIE constants used by most
//! colorimetry references:
//!
//! ```text
//! e = 0.008856
//! k = 903.3
//!
//! f(t) = t^(1/3)          if t > e
//!      = (k * t + 16) / 116  otherwise
//! ```
//!
//! With the rounded constants the two branches differ by about 3e-7 at `e`.

use cie_math::Vec3;

/// Break point between the linear segment and the cube root.
pub const EPSILON: f64 = 0.008856;

/// Slope of the linear segment (in L* units).
pub const KAPPA: f64 = 903.3;

/// Forward Lab nonlinearity.
///
/// # Example
///
/// ```rust
/// use cie_transfer::lab::f;
///
/// assert_eq!(f(1.0), 1.0);
/// assert_eq!(f(0.0), 16.0 / 116.0);
/// ```
#[inline]
pub fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Inverse of [`f`] for the a/b axes.
///
/// Lightness uses its own threshold, see [`lightness_inv`].
#[inline]
pub fn f_inv(ft: f64) -> f64 {
    let t = ft * ft * ft;
    if t > EPSILON {
        t
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// Relative luminance `Y/Yn` from L*.
#[inline]
pub fn lightness_inv(l: f64) -> f64 {
    if l > KAPPA * EPSILON {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / KAPPA
    }
}

/// Applies [`f`] to a white-relative triplet.
#[inline]
pub fn f_rgb(t: Vec3) -> Vec3 {
    t.map(f)
}
