//! Sampled spectral quantities: sample curves, illuminants and observers.

use crate::error::{SpectralError, SpectralResult};
use crate::tables::{
    CIE1931_X_BAR, CIE1931_Y_BAR, CIE1931_Z_BAR, D50_SPD, D65_SPD, E_SPD,
};
use cie_primaries::WhitePoint;
use serde::{Deserialize, Serialize};

/// Reflectance or transmittance of a sample, one value per wavelength bin.
///
/// Values are kept as measured; negative or >1 readings are not corrected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpectralCurve(Vec<f64>);

impl SpectralCurve {
    /// Wraps sample values.
    pub fn new(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    /// A curve of `len` equal samples.
    ///
    /// `SpectralCurve::constant(31, 1.0)` is the perfect white reflector.
    pub fn constant(len: usize, value: f64) -> Self {
        Self(vec![value; len])
    }

    /// Parses whitespace or newline separated numbers.
    ///
    /// Values outside [0, 1] are kept; `NaN` and infinities are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cie_spectral::SpectralCurve;
    ///
    /// let curve = SpectralCurve::parse("0.5 0.6\n0.7").unwrap();
    /// assert_eq!(curve.samples(), &[0.5, 0.6, 0.7]);
    /// ```
    pub fn parse(text: &str) -> SpectralResult<Self> {
        text.split_whitespace()
            .map(|token| match token.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                Ok(_) => Err(SpectralError::ParseError(format!(
                    "'{}': not a finite number",
                    token
                ))),
                Err(e) => Err(SpectralError::ParseError(format!("'{}': {}", token, e))),
            })
            .collect::<SpectralResult<Vec<_>>>()
            .map(Self)
    }

    /// Sample values.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.0
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for SpectralCurve {
    fn from(samples: Vec<f64>) -> Self {
        Self(samples)
    }
}

/// Relative spectral power distribution of a reference illuminant.
///
/// `white` names the white point that tristimulus values integrated under
/// this illuminant are expressed against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Illuminant {
    /// Display name.
    pub name: String,
    /// White point implied by this illuminant.
    pub white: WhitePoint,
    /// Relative power per wavelength bin.
    pub spd: Vec<f64>,
}

impl Illuminant {
    /// CIE D50.
    pub fn d50() -> Self {
        Self {
            name: "D50".into(),
            white: WhitePoint::D50,
            spd: D50_SPD.to_vec(),
        }
    }

    /// CIE D65.
    pub fn d65() -> Self {
        Self {
            name: "D65".into(),
            white: WhitePoint::D65,
            spd: D65_SPD.to_vec(),
        }
    }

    /// Equal-energy illuminant E.
    pub fn e() -> Self {
        Self {
            name: "E".into(),
            white: WhitePoint::E,
            spd: E_SPD.to_vec(),
        }
    }

    /// Built-in illuminant for a white point.
    pub fn for_white(white: WhitePoint) -> Self {
        match white {
            WhitePoint::D50 => Self::d50(),
            WhitePoint::D65 => Self::d65(),
            WhitePoint::E => Self::e(),
        }
    }
}

/// Color-matching functions x̄, ȳ, z̄ on a shared grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMatchingFunctions {
    /// x̄
    pub x_bar: Vec<f64>,
    /// ȳ
    pub y_bar: Vec<f64>,
    /// z̄
    pub z_bar: Vec<f64>,
}

impl ColorMatchingFunctions {
    /// CIE 1931 2° standard observer.
    pub fn cie1931() -> Self {
        Self {
            x_bar: CIE1931_X_BAR.to_vec(),
            y_bar: CIE1931_Y_BAR.to_vec(),
            z_bar: CIE1931_Z_BAR.to_vec(),
        }
    }

    /// Sample count, or a shape error if the three functions disagree.
    pub fn sample_count(&self) -> SpectralResult<usize> {
        let n = self.y_bar.len();
        check_len("x_bar", self.x_bar.len(), n)?;
        check_len("z_bar", self.z_bar.len(), n)?;
        Ok(n)
    }
}

/// Rejects a sequence whose length differs from the grid's.
pub(crate) fn check_len(what: &'static str, actual: usize, expected: usize) -> SpectralResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(SpectralError::ShapeMismatch {
            what,
            expected,
            actual,
        })
    }
}
