//! sRGB companding (IEC 61966-2-1).
//!
//! A straight segment of slope 12.92 near black joins a 1/2.4 power curve
//! with offset 0.055. Inputs outside [0, 1] are not clamped; negatives stay
//! on the straight segment.

use cie_math::Vec3;

/// Linear value where encoding switches to the power curve.
pub const LINEAR_BREAK: f64 = 0.0031308;

/// Encoded value where decoding switches to the power curve.
pub const ENCODED_BREAK: f64 = 0.04045;

const SLOPE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const GAMMA: f64 = 2.4;

/// Encoded sRGB to linear.
///
/// ```rust
/// use cie_transfer::srgb::eotf;
///
/// assert!((eotf(0.5) - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    match v {
        v if v <= ENCODED_BREAK => v / SLOPE,
        v => ((v + OFFSET) / (1.0 + OFFSET)).powf(GAMMA),
    }
}

/// Linear to encoded sRGB.
///
/// ```rust
/// use cie_transfer::srgb::oetf;
///
/// assert!((oetf(0.214) - 0.5).abs() < 0.001);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    match l {
        l if l <= LINEAR_BREAK => l * SLOPE,
        l => (1.0 + OFFSET) * l.powf(GAMMA.recip()) - OFFSET,
    }
}

/// [`eotf`] per channel.
#[inline]
pub fn eotf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(eotf)
}

/// [`oetf`] per channel.
#[inline]
pub fn oetf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_encode_grid() {
        for code in 0..=255 {
            let v = code as f64 / 255.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-9, "code {}: {}", code, back * 255.0);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_oetf_continuous_at_break() {
        let linear = LINEAR_BREAK * 12.92;
        let power = 1.055 * LINEAR_BREAK.powf(1.0 / 2.4) - 0.055;
        assert!((linear - power).abs() < 1e-6, "{} vs {}", linear, power);
        assert!((oetf(LINEAR_BREAK) - oetf(LINEAR_BREAK + 1e-12)).abs() < 1e-6);
    }

    #[test]
    fn test_eotf_continuous_at_break() {
        let linear = ENCODED_BREAK / 12.92;
        let power = ((ENCODED_BREAK + 0.055) / 1.055).powf(2.4);
        assert!((linear - power).abs() < 1e-6, "{} vs {}", linear, power);
    }

    #[test]
    fn test_negative_passes_through_linear_segment() {
        assert!((oetf(-0.01) + 0.1292).abs() < 1e-12);
        assert!((eotf(-0.1292) + 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_triplets() {
        let rgb = Vec3::new(0.0, 0.5, 1.0);
        let back = oetf_rgb(eotf_rgb(rgb));
        assert!(back.max_abs_diff(rgb) < 1e-12);
    }
}
