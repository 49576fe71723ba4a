//! Chromatic adaptation between reference whites.
//!
//! Adaptation matrices are looked up by direction, never inverted on the fly:
//! both D50 -> D65 and D65 -> D50 are stored as published. The two directions
//! compose to identity only to about 1e-7, so callers that invert one and
//! compare against the other would see drift.
//!
//! [`Adaptations::derived`] computes a matrix from the Bradford cone
//! response matrix instead, for pairs with no published constants.

use crate::error::{ColorError, ColorResult};
use crate::types::Xyz;
use cie_math::{
    adapt_matrix, Mat3, BRADFORD, D50_TO_D65_BRADFORD, D50_TO_E_BRADFORD, D65_TO_D50_BRADFORD,
    E_TO_D50_BRADFORD,
};
use cie_primaries::WhitePoint;
use serde::{Deserialize, Serialize};

/// A 3x3 matrix taking XYZ under `from` to XYZ under `to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptationMatrix {
    /// Source white.
    pub from: WhitePoint,
    /// Destination white.
    pub to: WhitePoint,
    /// Row-major matrix.
    pub matrix: Mat3,
}

impl AdaptationMatrix {
    /// Bundles a matrix with its direction.
    pub const fn new(from: WhitePoint, to: WhitePoint, matrix: Mat3) -> Self {
        Self { from, to, matrix }
    }

    /// Bradford matrix computed from the white point constants.
    pub fn bradford(from: WhitePoint, to: WhitePoint) -> ColorResult<Self> {
        let matrix = adapt_matrix(BRADFORD, from.xyz(), to.xyz()).ok_or_else(|| {
            ColorError::MatrixError(format!("cannot derive Bradford {} -> {}", from, to))
        })?;
        Ok(Self::new(from, to, matrix))
    }

    /// Applies the matrix.
    ///
    /// Fails with [`ColorError::WhitePointMismatch`] if `xyz` is not tagged
    /// with `self.from`; the result is tagged with `self.to`.
    pub fn apply(&self, xyz: Xyz) -> ColorResult<Xyz> {
        if xyz.white != self.from {
            return Err(ColorError::WhitePointMismatch {
                expected: self.from,
                actual: xyz.white,
            });
        }
        Ok(Xyz::from_vec3(self.matrix * xyz.to_vec3(), self.to))
    }
}

/// Adapts `xyz` with `matrix`.
///
/// # Example
///
/// ```rust
/// use cie_color::{adapt, Adaptations, Xyz};
/// use cie_color::primaries::WhitePoint;
///
/// let table = Adaptations::standard();
/// let m = table.get(WhitePoint::D50, WhitePoint::D65).unwrap();
/// let d65 = adapt(Xyz::white_of(WhitePoint::D50), m).unwrap();
/// assert_eq!(d65.white, WhitePoint::D65);
/// assert!((d65.x - 0.95047).abs() < 1e-4);
/// ```
#[inline]
pub fn adapt(xyz: Xyz, matrix: &AdaptationMatrix) -> ColorResult<Xyz> {
    matrix.apply(xyz)
}

/// Lookup table of adaptation matrices keyed by direction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Adaptations {
    entries: Vec<AdaptationMatrix>,
}

impl Adaptations {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Published Bradford constants: D50 <-> D65 and D50 <-> E.
    pub fn standard() -> Self {
        use WhitePoint::*;
        Self {
            entries: vec![
                AdaptationMatrix::new(D50, D65, D50_TO_D65_BRADFORD),
                AdaptationMatrix::new(D65, D50, D65_TO_D50_BRADFORD),
                AdaptationMatrix::new(D50, E, D50_TO_E_BRADFORD),
                AdaptationMatrix::new(E, D50, E_TO_D50_BRADFORD),
            ],
        }
    }

    /// Bradford matrix for any pair, computed rather than looked up.
    ///
    /// `from == to` yields the identity.
    pub fn derived(from: WhitePoint, to: WhitePoint) -> ColorResult<AdaptationMatrix> {
        AdaptationMatrix::bradford(from, to)
    }

    /// Derived matrices for every ordered pair of distinct white points.
    pub fn derived_table() -> ColorResult<Self> {
        let mut table = Self::new();
        for from in WhitePoint::ALL {
            for to in WhitePoint::ALL {
                if from != to {
                    table.insert(Self::derived(from, to)?);
                }
            }
        }
        Ok(table)
    }

    /// Adds or replaces the matrix for `m.from -> m.to`.
    pub fn insert(&mut self, m: AdaptationMatrix) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.from == m.from && e.to == m.to)
        {
            Some(slot) => *slot = m,
            None => self.entries.push(m),
        }
    }

    /// The matrix for `from -> to`.
    ///
    /// Fails with [`ColorError::MissingAdaptation`] if that direction is not
    /// stored, even when the reverse direction is.
    pub fn get(&self, from: WhitePoint, to: WhitePoint) -> ColorResult<&AdaptationMatrix> {
        self.entries
            .iter()
            .find(|e| e.from == from && e.to == to)
            .ok_or(ColorError::MissingAdaptation { from, to })
    }

    /// Brings `xyz` under `target`, passing it through if already there.
    pub fn adapt_to(&self, xyz: Xyz, target: WhitePoint) -> ColorResult<Xyz> {
        if xyz.white == target {
            return Ok(xyz);
        }
        self.get(xyz.white, target)?.apply(xyz)
    }

    /// Stored matrices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AdaptationMatrix> {
        self.entries.iter()
    }

    /// Number of stored directions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cie_math::Vec3;

    #[test]
    fn test_standard_directions() {
        let t = Adaptations::standard();
        assert_eq!(t.len(), 4);
        assert!(t.get(WhitePoint::D50, WhitePoint::D65).is_ok());
        assert!(t.get(WhitePoint::D65, WhitePoint::D50).is_ok());
        assert!(t.get(WhitePoint::D50, WhitePoint::E).is_ok());
        assert!(t.get(WhitePoint::E, WhitePoint::D50).is_ok());
    }

    #[test]
    fn test_missing_direction() {
        let t = Adaptations::standard();
        assert_eq!(
            t.get(WhitePoint::D65, WhitePoint::E).unwrap_err(),
            ColorError::MissingAdaptation {
                from: WhitePoint::D65,
                to: WhitePoint::E,
            }
        );
    }

    #[test]
    fn test_apply_checks_white() {
        let t = Adaptations::standard();
        let m = t.get(WhitePoint::D50, WhitePoint::D65).unwrap();
        let err = m.apply(Xyz::white_of(WhitePoint::E)).unwrap_err();
        assert_eq!(
            err,
            ColorError::WhitePointMismatch {
                expected: WhitePoint::D50,
                actual: WhitePoint::E,
            }
        );
    }

    #[test]
    fn test_forward_then_back() {
        let t = Adaptations::standard();
        let xyz = Xyz::new(0.3, 0.4, 0.2, WhitePoint::D50);
        for other in [WhitePoint::D65, WhitePoint::E] {
            let there = t.adapt_to(xyz, other).unwrap();
            let back = t.adapt_to(there, WhitePoint::D50).unwrap();
            assert_eq!(back.white, WhitePoint::D50);
            assert!(back.to_vec3().max_abs_diff(xyz.to_vec3()) < 1e-6);
        }
    }

    #[test]
    fn test_white_maps_to_white() {
        let t = Adaptations::standard();
        let d65 = t.adapt_to(Xyz::white_of(WhitePoint::D50), WhitePoint::D65).unwrap();
        assert!(d65.to_vec3().max_abs_diff(cie_math::D65) < 1e-4);
        let e = t.adapt_to(Xyz::white_of(WhitePoint::D50), WhitePoint::E).unwrap();
        assert!(e.to_vec3().max_abs_diff(Vec3::ONE) < 1e-4);
    }

    #[test]
    fn test_same_white_passes_through() {
        let t = Adaptations::new();
        let xyz = Xyz::new(0.1, 0.2, 0.3, WhitePoint::D65);
        assert_eq!(t.adapt_to(xyz, WhitePoint::D65), Ok(xyz));
    }

    #[test]
    fn test_derived_identity() {
        let m = Adaptations::derived(WhitePoint::D65, WhitePoint::D65).unwrap();
        assert!(m.matrix.max_abs_diff(&Mat3::IDENTITY) < 1e-12);
    }

    #[test]
    fn test_derived_close_to_published() {
        let derived = Adaptations::derived_table().unwrap();
        assert_eq!(derived.len(), 6);
        for m in Adaptations::standard().iter() {
            let d = derived.get(m.from, m.to).unwrap();
            assert!(d.matrix.max_abs_diff(&m.matrix) < 1e-4, "{} -> {}", m.from, m.to);
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut t = Adaptations::standard();
        t.insert(AdaptationMatrix::new(WhitePoint::D50, WhitePoint::D65, Mat3::IDENTITY));
        assert_eq!(t.len(), 4);
        assert_eq!(t.get(WhitePoint::D50, WhitePoint::D65).unwrap().matrix, Mat3::IDENTITY);
    }
}
