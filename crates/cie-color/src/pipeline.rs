//! End-to-end conversions.
//!
//! ```text
//! spectral curve ─► XYZ (illuminant white) ─┬─► Lab (Lab white)
//!                                           ├─► adapt ─► XYZ (D65) ─► sRGB
//!                                           └─► adapt ─► XYZ (E)   ─► CIE RGB
//!
//! sRGB ─► XYZ (D65) ─► adapt ─► XYZ (Lab white) ─► Lab     (SrgbReport)
//! ```
//!
//! Every table comes from the [`ReferenceData`] passed in; adaptation is
//! skipped when the source and target whites already agree.

use crate::error::ColorResult;
use crate::lab::{lab_to_xyz, xyz_to_lab};
use crate::reference::ReferenceData;
use crate::types::{Lab, Rgb255, Xyz};
use cie_spectral::SpectralCurve;
use serde::Serialize;

/// Every intermediate of one spectral conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectralReport {
    /// Integrated tristimulus, under the illuminant's white.
    pub xyz: Xyz,
    /// CIELAB relative to the Lab white.
    pub lab: Lab,
    /// Adapted to the sRGB white (D65).
    pub xyz_srgb: Xyz,
    /// Adapted to the CIE RGB white (E).
    pub xyz_cie_rgb: Xyz,
    /// Companded sRGB.
    pub srgb: Rgb255,
    /// Companded CIE RGB.
    pub cie_rgb: Rgb255,
}

/// Spectral curve to XYZ, Lab, sRGB and CIE RGB.
///
/// # Example
///
/// ```rust
/// use cie_color::{ReferenceData, SpectralPipeline};
/// use cie_color::spectral::{SpectralCurve, SAMPLE_COUNT};
///
/// let data = ReferenceData::standard();
/// let pipeline = SpectralPipeline::new(&data).unwrap();
/// let report = pipeline.convert(&SpectralCurve::constant(SAMPLE_COUNT, 1.0)).unwrap();
/// assert!((report.xyz.y - 1.0).abs() < 1e-12);
/// assert!((report.lab.l - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpectralPipeline<'a> {
    data: &'a ReferenceData,
}

impl<'a> SpectralPipeline<'a> {
    /// Binds the pipeline to `data`, checking it covers every hop.
    pub fn new(data: &'a ReferenceData) -> ColorResult<Self> {
        data.validate()?;
        Ok(Self { data })
    }

    /// Reference data in use.
    pub fn data(&self) -> &ReferenceData {
        self.data
    }

    /// Integrates the curve and derives every downstream value.
    pub fn convert(&self, curve: &SpectralCurve) -> ColorResult<SpectralReport> {
        let data = self.data;
        let xyz = self.integrate(curve)?;

        let lab = xyz_to_lab(data.adaptations.adapt_to(xyz, data.lab_white)?, data.lab_white)?;

        let xyz_srgb = data.adaptations.adapt_to(xyz, data.srgb.white)?;
        let srgb = data.srgb.encode(xyz_srgb)?;

        let xyz_cie_rgb = data.adaptations.adapt_to(xyz, data.cie_rgb.white)?;
        let cie_rgb = data.cie_rgb.encode(xyz_cie_rgb)?;

        Ok(SpectralReport {
            xyz,
            lab,
            xyz_srgb,
            xyz_cie_rgb,
            srgb,
            cie_rgb,
        })
    }

    /// Integration step alone, tagged with the illuminant's white.
    pub fn integrate(&self, curve: &SpectralCurve) -> ColorResult<Xyz> {
        let tables = &self.data.spectral;
        Ok(Xyz::from_vec3(tables.integrate(curve)?, tables.white()))
    }
}

/// Every intermediate of one sRGB to Lab conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SrgbReport {
    /// Input code values.
    pub srgb: Rgb255,
    /// Decoded, under the sRGB white.
    pub xyz: Xyz,
    /// Adapted to the Lab white.
    pub xyz_adapted: Xyz,
    /// CIELAB relative to the Lab white.
    pub lab: Lab,
}

/// sRGB to CIELAB, keeping the XYZ stages.
pub fn srgb_to_lab_report(rgb: Rgb255, data: &ReferenceData) -> ColorResult<SrgbReport> {
    let xyz = data.srgb.decode(rgb)?;
    let xyz_adapted = data.adaptations.adapt_to(xyz, data.lab_white)?;
    let lab = xyz_to_lab(xyz_adapted, data.lab_white)?;
    Ok(SrgbReport {
        srgb: rgb,
        xyz,
        xyz_adapted,
        lab,
    })
}

/// sRGB to CIELAB via XYZ (D65) and adaptation to the Lab white.
///
/// # Example
///
/// ```rust
/// use cie_color::{srgb_to_lab, ReferenceData, Rgb255};
///
/// let lab = srgb_to_lab(Rgb255::srgb(255.0, 255.0, 255.0), &ReferenceData::standard()).unwrap();
/// assert!((lab.l - 100.0).abs() < 0.01);
/// ```
pub fn srgb_to_lab(rgb: Rgb255, data: &ReferenceData) -> ColorResult<Lab> {
    srgb_to_lab_report(rgb, data).map(|report| report.lab)
}

/// CIELAB back to sRGB via adaptation to D65.
pub fn lab_to_srgb(lab: Lab, data: &ReferenceData) -> ColorResult<Rgb255> {
    let xyz = data.adaptations.adapt_to(lab_to_xyz(lab), data.srgb.white)?;
    data.srgb.encode(xyz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;
    use crate::types::RgbSpace;
    use cie_primaries::WhitePoint;
    use cie_spectral::SAMPLE_COUNT;

    #[test]
    fn test_zero_curve() {
        let data = ReferenceData::standard();
        let report = SpectralPipeline::new(&data)
            .unwrap()
            .convert(&SpectralCurve::constant(SAMPLE_COUNT, 0.0))
            .unwrap();
        assert_eq!(report.xyz.to_vec3(), cie_math::Vec3::ZERO);
        assert_eq!(report.lab.l, 0.0);
        assert_eq!(report.srgb.to_vec3(), cie_math::Vec3::ZERO);
    }

    #[test]
    fn test_report_tags() {
        let data = ReferenceData::standard();
        let report = SpectralPipeline::new(&data)
            .unwrap()
            .convert(&SpectralCurve::constant(SAMPLE_COUNT, 0.5))
            .unwrap();
        assert_eq!(report.xyz.white, WhitePoint::D50);
        assert_eq!(report.lab.white, WhitePoint::D50);
        assert_eq!(report.xyz_srgb.white, WhitePoint::D65);
        assert_eq!(report.xyz_cie_rgb.white, WhitePoint::E);
        assert_eq!(report.srgb.space, RgbSpace::Srgb);
        assert_eq!(report.cie_rgb.space, RgbSpace::CieRgb);
    }

    #[test]
    fn test_shape_error_surfaces() {
        let data = ReferenceData::standard();
        let err = SpectralPipeline::new(&data)
            .unwrap()
            .convert(&SpectralCurve::constant(5, 1.0))
            .unwrap_err();
        assert!(matches!(err, ColorError::Spectral(_)));
    }

    #[test]
    fn test_new_rejects_incomplete_data() {
        let mut data = ReferenceData::standard();
        data.adaptations = crate::adapt::Adaptations::new();
        assert!(matches!(
            SpectralPipeline::new(&data),
            Err(ColorError::MissingAdaptation { .. })
        ));
    }

    #[test]
    fn test_srgb_to_lab_rejects_cie_rgb() {
        let rgb = Rgb255::new(1.0, 2.0, 3.0, RgbSpace::CieRgb);
        assert!(matches!(
            srgb_to_lab(rgb, &ReferenceData::standard()),
            Err(ColorError::SpaceMismatch { .. })
        ));
    }

    #[test]
    fn test_lab_roundtrip_gray() {
        let data = ReferenceData::standard();
        let rgb = Rgb255::srgb(128.0, 128.0, 128.0);
        let back = lab_to_srgb(srgb_to_lab(rgb, &data).unwrap(), &data).unwrap();
        assert!(back.to_vec3().max_abs_diff(rgb.to_vec3()) < 0.01, "{:?}", back);
    }

    #[test]
    fn test_srgb_report_stages() {
        let data = ReferenceData::standard();
        let rgb = Rgb255::srgb(176.8792173, 165.8431174, 9.550607287);
        let report = srgb_to_lab_report(rgb, &data).unwrap();
        assert_eq!(report.srgb, rgb);
        assert_eq!(report.xyz.white, WhitePoint::D65);
        assert_eq!(report.xyz_adapted.white, WhitePoint::D50);
        assert_eq!(report.xyz, data.srgb.decode(rgb).unwrap());
        assert_eq!(report.lab, srgb_to_lab(rgb, &data).unwrap());
    }
}
