//! Row-major 3x3 matrices.
//!
//! Every linear step in the conversion chain (RGB <-> XYZ, chromatic
//! adaptation) is a [`Mat3`] applied to a column [`Vec3`]:
//!
//! ```text
//! out[i] = Σj m[i][j] · v[j]
//! ```
//!
//! Published matrices are written row by row, so storage follows the same
//! order and [`Mat3::from_rows`] takes literals directly.

use crate::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::{Index, Mul};

/// 3x3 matrix, row-major, serialized as three rows.
///
/// ```rust
/// use cie_math::{Mat3, Vec3};
///
/// let half = Mat3::diagonal(0.5, 0.5, 0.5);
/// assert_eq!(half * Vec3::new(2.0, 4.0, 8.0), Vec3::new(1.0, 2.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(C)]
pub struct Mat3 {
    /// Rows.
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// All zeros.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// From rows as published.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// From columns.
    #[inline]
    pub const fn from_cols(cols: [[f64; 3]; 3]) -> Self {
        Self::from_rows(cols).transpose()
    }

    /// From three column vectors, e.g. the XYZ of each RGB primary.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Diagonal matrix, e.g. a per-channel gain.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Rows become columns.
    #[inline]
    pub const fn transpose(&self) -> Self {
        let m = &self.m;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let [a, b, c] = self.m;
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }

    /// Inverse, or `None` when `|det| < 1e-12`.
    ///
    /// ```rust
    /// use cie_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 4.0, 8.0);
    /// let inv = m.inverse().unwrap();
    /// assert!((m * inv).max_abs_diff(&Mat3::IDENTITY) < 1e-12);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        if self.determinant().abs() < 1e-12 {
            return None;
        }
        Some(Self::from_glam(self.to_glam().inverse()))
    }

    /// `self · v`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Largest absolute element difference to `other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// True if no element is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// As a glam matrix (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&self.transpose().m)
    }

    /// From a glam matrix.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    /// Composition: `(a * b) * v == a * (b * v)`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let cols = rhs.transpose();
        Self::from_rows(self.m.map(|row| {
            let r = Vec3::from_array(row);
            [0, 1, 2].map(|j| r.dot(cols.row(j)))
        }))
    }
}

impl Mul<f64> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_rows(self.m.map(|row| row.map(|v| v * rhs)))
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}
