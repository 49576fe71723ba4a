//! Spectral to XYZ integration.
//!
//! ```text
//! N = Σ ȳ(λ) · I(λ) · Δλ
//! X = 1/N · Σ x̄(λ) · S(λ) · I(λ) · Δλ
//! Y = 1/N · Σ ȳ(λ) · S(λ) · I(λ) · Δλ
//! Z = 1/N · Σ z̄(λ) · S(λ) · I(λ) · Δλ
//! ```
//!
//! `N` normalizes luminance so a perfect white reflector (S = 1 everywhere)
//! has Y = 1, matching the Y = 1 white point constants.

use crate::curve::{check_len, ColorMatchingFunctions, Illuminant, SpectralCurve};
use crate::error::{SpectralError, SpectralResult};
use crate::tables::{DELTA_LAMBDA, START_NM};
use cie_math::Vec3;
use cie_primaries::WhitePoint;
use serde::{Deserialize, Serialize};

/// Integrates a sample curve against an illuminant and observer.
///
/// All sequences must share one length; `delta_lambda` must be positive.
/// The result is expressed against the white point of `illuminant`.
///
/// # Example
///
/// ```rust
/// use cie_spectral::{integrate_xyz, ColorMatchingFunctions, Illuminant, SAMPLE_COUNT};
///
/// let white = vec![1.0; SAMPLE_COUNT];
/// let xyz = integrate_xyz(
///     &white,
///     &Illuminant::d50().spd,
///     &ColorMatchingFunctions::cie1931(),
///     10.0,
/// )
/// .unwrap();
/// assert!((xyz.y - 1.0).abs() < 1e-12);
/// ```
pub fn integrate_xyz(
    samples: &[f64],
    illuminant: &[f64],
    cmf: &ColorMatchingFunctions,
    delta_lambda: f64,
) -> SpectralResult<Vec3> {
    if !(delta_lambda.is_finite() && delta_lambda > 0.0) {
        return Err(SpectralError::InvalidInterval(delta_lambda));
    }
    let n = cmf.sample_count()?;
    check_len("illuminant", illuminant.len(), n)?;
    check_len("sample curve", samples.len(), n)?;

    let norm: f64 = cmf
        .y_bar
        .iter()
        .zip(illuminant)
        .map(|(y, i)| y * i * delta_lambda)
        .sum();
    if norm == 0.0 || !norm.is_finite() {
        return Err(SpectralError::DegenerateNormalization(norm));
    }

    let weighted = |bar: &[f64]| -> f64 {
        bar.iter()
            .zip(samples)
            .zip(illuminant)
            .map(|((c, s), i)| c * s * i * delta_lambda)
            .sum::<f64>()
            / norm
    };

    Ok(Vec3::new(
        weighted(&cmf.x_bar),
        weighted(&cmf.y_bar),
        weighted(&cmf.z_bar),
    ))
}

/// Wavelength grid, illuminant and observer used to integrate sample curves.
///
/// Construction validates that every table has the same length and that the
/// normalizer is non-zero, so [`SpectralTables::integrate`] can only fail on
/// the sample curve itself. Deserialization goes through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TablesRepr", into = "TablesRepr")]
pub struct SpectralTables {
    start_nm: f64,
    delta_lambda: f64,
    illuminant: Illuminant,
    cmf: ColorMatchingFunctions,
}

#[derive(Serialize, Deserialize)]
struct TablesRepr {
    start_nm: f64,
    delta_lambda: f64,
    illuminant: Illuminant,
    cmf: ColorMatchingFunctions,
}

impl TryFrom<TablesRepr> for SpectralTables {
    type Error = SpectralError;

    fn try_from(r: TablesRepr) -> SpectralResult<Self> {
        SpectralTables::new(r.start_nm, r.delta_lambda, r.illuminant, r.cmf)
    }
}

impl From<SpectralTables> for TablesRepr {
    fn from(t: SpectralTables) -> Self {
        Self {
            start_nm: t.start_nm,
            delta_lambda: t.delta_lambda,
            illuminant: t.illuminant,
            cmf: t.cmf,
        }
    }
}

impl SpectralTables {
    /// Validates and bundles reference tables.
    pub fn new(
        start_nm: f64,
        delta_lambda: f64,
        illuminant: Illuminant,
        cmf: ColorMatchingFunctions,
    ) -> SpectralResult<Self> {
        // Integrating the white reflector exercises every check
        let n = cmf.sample_count()?;
        integrate_xyz(&vec![1.0; n], &illuminant.spd, &cmf, delta_lambda)?;
        Ok(Self {
            start_nm,
            delta_lambda,
            illuminant,
            cmf,
        })
    }

    /// Built-in 400-700 nm / 10 nm grid with the CIE 1931 observer.
    pub fn standard(white: WhitePoint) -> Self {
        Self {
            start_nm: START_NM,
            delta_lambda: DELTA_LAMBDA,
            illuminant: Illuminant::for_white(white),
            cmf: ColorMatchingFunctions::cie1931(),
        }
    }

    /// Integrates `curve` to XYZ relative to [`Self::white`].
    pub fn integrate(&self, curve: &SpectralCurve) -> SpectralResult<Vec3> {
        integrate_xyz(
            curve.samples(),
            &self.illuminant.spd,
            &self.cmf,
            self.delta_lambda,
        )
    }

    /// XYZ of the perfect white reflector on this grid.
    ///
    /// Y is 1 by construction; X and Z show how far the truncated grid is
    /// from the tabulated white point.
    pub fn white_point_xyz(&self) -> SpectralResult<Vec3> {
        self.integrate(&SpectralCurve::constant(self.len(), 1.0))
    }

    /// White point of the illuminant.
    #[inline]
    pub fn white(&self) -> WhitePoint {
        self.illuminant.white
    }

    /// Number of wavelength samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.illuminant.spd.len()
    }

    /// True if the grid has no samples (never for validated tables).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.illuminant.spd.is_empty()
    }

    /// Sampled wavelengths in nanometers.
    pub fn wavelengths(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(|i| self.start_nm + self.delta_lambda * i as f64)
    }

    /// Wavelength spacing in nanometers.
    #[inline]
    pub fn delta_lambda(&self) -> f64 {
        self.delta_lambda
    }

    /// The illuminant.
    #[inline]
    pub fn illuminant(&self) -> &Illuminant {
        &self.illuminant
    }

    /// The color-matching functions.
    #[inline]
    pub fn cmf(&self) -> &ColorMatchingFunctions {
        &self.cmf
    }
}
