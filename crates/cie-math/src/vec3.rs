//! Color triplets.
//!
//! One type for XYZ, RGB and Lab numbers; what the numbers mean is tracked
//! by the tagged types in `cie-color`, not here.
//!
//! # Usage
//!
//! ```rust
//! use cie_math::Vec3;
//!
//! let xyz = Vec3::new(0.3176, 0.3657, 0.0566);
//! let relative = xyz / Vec3::new(0.95047, 1.0, 1.08883);
//! let encoded = relative.map(f64::cbrt);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Index, Mul, Sub};

/// Three f64 components, serialized as `[x, y, z]`.
///
/// Arithmetic is component-wise, including `*` and `/` between vectors
/// (dividing by a white point gives white-relative values).
///
/// # Example
///
/// ```rust
/// use cie_math::Vec3;
///
/// let color = Vec3::new(0.5, 0.25, 0.125);
/// assert_eq!(color.x, 0.5);
/// assert_eq!(color[2], 0.125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
#[repr(C)]
pub struct Vec3 {
    /// X, R or L*
    pub x: f64,
    /// Y, G or a*
    pub y: f64,
    /// Z, B or b*
    pub z: f64,
}

impl Vec3 {
    /// (0, 0, 0)
    pub const ZERO: Self = Self::splat(0.0);

    /// (1, 1, 1)
    pub const ONE: Self = Self::splat(1.0);

    /// From components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same value in every component.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// From `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// As `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        let p = self * other;
        p.x + p.y + p.z
    }

    /// Applies `f` to each component.
    ///
    /// This is how per-channel companding functions are lifted to triplets.
    ///
    /// ```rust
    /// use cie_math::Vec3;
    ///
    /// let v = Vec3::new(1.0, 8.0, 27.0).map(f64::cbrt);
    /// assert!((v.z - 3.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Largest absolute component difference to `other`.
    ///
    /// Used to express round-trip tolerances.
    #[inline]
    pub fn max_abs_diff(self, other: Self) -> f64 {
        let d = self - other;
        d.x.abs().max(d.y.abs()).max(d.z.abs())
    }

    /// True if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.to_array().iter().any(|c| c.is_nan())
    }

    /// True if no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    /// As a glam vector.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::from_array(self.to_array())
    }

    /// From a glam vector.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::from_array(v.to_array())
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 has 3 components, got index {}", i),
        }
    }
}

/// Component-wise `Vec3 op Vec3` and `Vec3 op f64`.
macro_rules! elementwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Vec3 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl $trait<f64> for Vec3 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: f64) -> Self {
                self.map(|c| c $op rhs)
            }
        }
    };
}

elementwise!(Add, add, +);
elementwise!(Sub, sub, -);
elementwise!(Mul, mul, *);
elementwise!(Div, div, /);

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_splat() {
        assert_eq!(Vec3::splat(0.5), Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(Vec3::ONE.to_array(), [1.0; 3]);
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(a + 1.0, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn test_vec3_map() {
        let v = Vec3::new(0.0, 0.25, 4.0).map(f64::sqrt);
        assert_eq!(v, Vec3::new(0.0, 0.5, 2.0));
    }

    #[test]
    fn test_vec3_max_abs_diff() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.5, 1.0, 3.25);
        assert_eq!(a.max_abs_diff(b), 1.0);
    }

    #[test]
    fn test_vec3_non_finite() {
        assert!(Vec3::new(f64::NAN, 0.0, 0.0).is_nan());
        assert!(!Vec3::new(f64::INFINITY, 0.0, 0.0).is_finite());
        assert!(Vec3::ONE.is_finite());
    }

    #[test]
    fn test_vec3_serde_array() {
        let v: Vec3 = serde_json::from_str("[0.5, 1.0, 2.0]").unwrap();
        assert_eq!(v, Vec3::new(0.5, 1.0, 2.0));
    }

    #[test]
    fn test_vec3_index_matches_fields() {
        let v = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!([v[0], v[1], v[2]], [v.x, v.y, v.z]);
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(0.1, -0.2, 0.3);
        assert_eq!(Vec3::from_glam(v.to_glam()), v);
    }
}
