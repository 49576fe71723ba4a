//! Injectable reference data.
//!
//! Every table a conversion consults lives in one [`ReferenceData`] value
//! that callers pass explicitly. [`ReferenceData::standard`] holds the
//! published tables; a serialized copy can be edited and loaded back to
//! swap the illuminant, observer or matrices.

use crate::adapt::Adaptations;
use crate::error::{ColorError, ColorResult};
use crate::rgb::RgbProfile;
use crate::types::RgbSpace;
use cie_primaries::WhitePoint;
use cie_spectral::SpectralTables;
use serde::{Deserialize, Serialize};

/// Tables used by the conversion pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Wavelength grid, illuminant and observer for spectral integration.
    pub spectral: SpectralTables,
    /// Reference white for CIELAB.
    pub lab_white: WhitePoint,
    /// sRGB matrices.
    pub srgb: RgbProfile,
    /// CIE RGB matrices.
    pub cie_rgb: RgbProfile,
    /// Chromatic adaptation matrices by direction.
    pub adaptations: Adaptations,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReferenceData {
    /// D50 illuminant, CIE 1931 observer, D50 Lab white, published matrices.
    pub fn standard() -> Self {
        Self {
            spectral: SpectralTables::standard(WhitePoint::D50),
            lab_white: WhitePoint::D50,
            srgb: RgbProfile::srgb(),
            cie_rgb: RgbProfile::cie_rgb(),
            adaptations: Adaptations::standard(),
        }
    }

    /// Checks that the tables fit together.
    ///
    /// The RGB profiles must be of the right space and carry that space's
    /// white (D65 for sRGB, E for CIE RGB). Every adaptation the
    /// pipelines need must be present:
    ///
    /// - spectral white to Lab white, sRGB white and CIE RGB white
    /// - sRGB white to Lab white
    ///
    /// Same-white hops need no matrix. Spectral tables validate themselves
    /// on construction.
    pub fn validate(&self) -> ColorResult<()> {
        for (profile, space) in [(&self.srgb, RgbSpace::Srgb), (&self.cie_rgb, RgbSpace::CieRgb)] {
            if profile.space != space {
                return Err(ColorError::InvalidReference(format!(
                    "{} profile is tagged {}",
                    space, profile.space
                )));
            }
            if profile.white != space.white() {
                return Err(ColorError::InvalidReference(format!(
                    "{} profile has white {}, expected {}",
                    space,
                    profile.white,
                    space.white()
                )));
            }
            if !(profile.to_xyz.is_finite() && profile.from_xyz.is_finite()) {
                return Err(ColorError::InvalidReference(format!(
                    "{} matrices are not finite",
                    space
                )));
            }
        }

        let src = self.spectral.white();
        let hops = [
            (src, self.lab_white),
            (src, self.srgb.white),
            (src, self.cie_rgb.white),
            (self.srgb.white, self.lab_white),
        ];
        for (from, to) in hops {
            if from != to {
                self.adaptations.get(from, to)?;
            }
        }
        Ok(())
    }
}
