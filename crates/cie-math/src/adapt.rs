//! Von Kries style chromatic adaptation.
//!
//! XYZ measured under one white is mapped to the XYZ the same surface would
//! have under another white by scaling in a cone response space:
//!
//! ```text
//! M_adapt = M⁻¹ · diag(M·w_dst / M·w_src) · M
//! ```
//!
//! The four Bradford directions the conversion chain needs are also stored
//! as published 7-digit constants. A stored pair is not an exact inverse:
//! `D50_TO_D65_BRADFORD * D65_TO_D50_BRADFORD` is off identity by ~1e-7.
//!
//! ```rust
//! use cie_math::{adapt_matrix, BRADFORD, D65, D50, Vec3};
//!
//! let m = adapt_matrix(BRADFORD, D65, D50).unwrap();
//! let olive = m * Vec3::new(0.3177, 0.3657, 0.0566);
//! assert!(olive.z < 0.0566);
//! ```

use crate::{Mat3, Vec3};

/// D65 white, 2° observer. sRGB is defined against it.
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// D50 white, 2° observer. The CIELAB and ICC reference.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// Equal-energy white, the reference of CIE RGB.
pub const E: Vec3 = Vec3::ONE;

/// Bradford cone response (Lam, 1985).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// No cone transform: XYZ components are scaled directly.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

/// Adaptation matrix taking XYZ relative to `src_white` to XYZ relative to
/// `dst_white`, using the cone response `method`.
///
/// `None` if `method` has no inverse or maps `src_white` onto a zero cone
/// channel.
///
/// ```rust
/// use cie_math::{adapt_matrix, BRADFORD, D65, D50};
///
/// let m = adapt_matrix(BRADFORD, D65, D50).unwrap();
/// assert!((m * D65).max_abs_diff(D50) < 1e-9);
/// ```
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Option<Mat3> {
    let back = method.inverse()?;
    let src = method * src_white;
    if src.to_array().contains(&0.0) {
        return None;
    }
    let gain = (method * dst_white) / src;
    Some(back * Mat3::diagonal(gain.x, gain.y, gain.z) * method)
}

/// Bradford, D65 to D50.
pub const D65_TO_D50_BRADFORD: Mat3 = Mat3::from_rows([
    [1.0478112, 0.0228866, -0.0501270],
    [0.0295424, 0.9904844, -0.0170491],
    [-0.0092345, 0.0150436, 0.7521316],
]);

/// Bradford, D50 to D65.
pub const D50_TO_D65_BRADFORD: Mat3 = Mat3::from_rows([
    [0.9555766, -0.0230393, 0.0631636],
    [-0.0282895, 1.0099416, 0.0210077],
    [0.0122982, -0.0204830, 1.3299098],
]);

/// Bradford, D50 to E. Applied before XYZ to CIE RGB.
pub const D50_TO_E_BRADFORD: Mat3 = Mat3::from_rows([
    [1.0025535, 0.0036238, 0.0359837],
    [0.0096914, 0.9819125, 0.0105947],
    [0.0089181, -0.0160789, 1.2208770],
]);

/// Bradford, E to D50.
pub const E_TO_D50_BRADFORD: Mat3 = Mat3::from_rows([
    [0.9977545, -0.0041632, -0.0293713],
    [-0.0097677, 1.0183168, -0.0085490],
    [-0.0074169, 0.0134416, 0.8191853],
]);
