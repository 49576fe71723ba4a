//! XYZ <-> CIELAB.
//!
//! ```text
//! L* = 116·f(Y/Yn) − 16
//! a* = 500·(f(X/Xn) − f(Y/Yn))
//! b* = 200·(f(Y/Yn) − f(Z/Zn))
//! ```
//!
//! with the CIE `f` from [`cie_transfer::lab`]. The reference white
//! (Xn, Yn, Zn) is the tabulated XYZ of the white point the value is tagged
//! with.

use crate::error::{ColorError, ColorResult};
use crate::types::{Lab, Xyz};
use cie_math::Vec3;
use cie_primaries::WhitePoint;
use cie_transfer::lab::{f_inv, f_rgb, lightness_inv};

/// Converts XYZ to CIELAB relative to `white`.
///
/// `xyz` must already be expressed under `white`; adapt it first otherwise.
///
/// # Example
///
/// ```rust
/// use cie_color::{xyz_to_lab, Xyz};
/// use cie_color::primaries::WhitePoint;
///
/// let lab = xyz_to_lab(Xyz::white_of(WhitePoint::D50), WhitePoint::D50).unwrap();
/// assert!((lab.l - 100.0).abs() < 1e-9);
/// assert!(lab.a.abs() < 1e-9 && lab.b.abs() < 1e-9);
/// ```
pub fn xyz_to_lab(xyz: Xyz, white: WhitePoint) -> ColorResult<Lab> {
    if xyz.white != white {
        return Err(ColorError::WhitePointMismatch {
            expected: white,
            actual: xyz.white,
        });
    }
    let f = f_rgb(xyz.to_vec3() / white.xyz());
    Ok(Lab::new(
        116.0 * f.y - 16.0,
        500.0 * (f.x - f.y),
        200.0 * (f.y - f.z),
        white,
    ))
}

/// Converts CIELAB back to XYZ under the Lab value's reference white.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;
    let rel = Vec3::new(f_inv(fx), lightness_inv(lab.l), f_inv(fz));
    Xyz::from_vec3(rel * lab.white.xyz(), lab.white)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black() {
        let lab = xyz_to_lab(Xyz::new(0.0, 0.0, 0.0, WhitePoint::D50), WhitePoint::D50).unwrap();
        assert!(lab.to_vec3().max_abs_diff(Vec3::ZERO) < 1e-12);
    }

    #[test]
    fn test_white_mismatch() {
        let err = xyz_to_lab(Xyz::white_of(WhitePoint::D65), WhitePoint::D50).unwrap_err();
        assert_eq!(
            err,
            ColorError::WhitePointMismatch {
                expected: WhitePoint::D50,
                actual: WhitePoint::D65,
            }
        );
    }

    #[test]
    fn test_roundtrip_both_branches() {
        // One value above the linear threshold, one deep in it
        for xyz in [
            Xyz::new(0.338376, 0.370646, 0.045137, WhitePoint::D50),
            Xyz::new(0.002, 0.003, 0.001, WhitePoint::D50),
        ] {
            let back = lab_to_xyz(xyz_to_lab(xyz, WhitePoint::D50).unwrap());
            assert_eq!(back.white, WhitePoint::D50);
            assert!(back.to_vec3().max_abs_diff(xyz.to_vec3()) < 1e-9, "{:?}", back);
        }
    }

    #[test]
    fn test_known_value() {
        let lab = xyz_to_lab(
            Xyz::new(0.338376, 0.370646, 0.045137, WhitePoint::D50),
            WhitePoint::D50,
        )
        .unwrap();
        assert!((lab.l - 67.3255).abs() < 1e-3);
        assert!((lab.a + 6.4841).abs() < 1e-3);
        assert!((lab.b - 67.7450).abs() < 1e-3);
    }

    #[test]
    fn test_other_white() {
        let lab = xyz_to_lab(Xyz::white_of(WhitePoint::E), WhitePoint::E).unwrap();
        assert!((lab.l - 100.0).abs() < 1e-9);
        assert_eq!(lab.white, WhitePoint::E);
    }
}
