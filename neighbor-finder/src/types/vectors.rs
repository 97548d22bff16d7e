//! 3-dimensional vector type
use std::ops::{Sub, Index};

/// A 3-dimensional vector type, storing Cartesian coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3D([f64; 3]);

impl Vector3D {
    /// Create a new `Vector3D` with components `x`, `y`, `z`
    pub fn new(x: f64, y: f64, z: f64) -> Vector3D {
        Vector3D([x, y, z])
    }

    /// Create a new `Vector3D` with all components set to 0
    pub fn zero() -> Vector3D {
        Vector3D([0.0, 0.0, 0.0])
    }

    /// Get the euclidean norm of this vector.
    ///
    /// The components are scaled by the largest one before squaring, so the
    /// norm of a vector with finite components is finite whenever the exact
    /// norm is representable.
    #[allow(clippy::float_cmp)]
    pub fn norm(&self) -> f64 {
        let scale = self.0.iter().fold(0.0, |max: f64, x| max.max(x.abs()));
        if scale == 0.0 {
            return 0.0;
        }

        let (x, y, z) = (self[0] / scale, self[1] / scale, self[2] / scale);
        return scale * f64::sqrt(x * x + y * y + z * z);
    }

    /// Check that all components of this vector are finite (neither NaN nor
    /// infinite)
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(array: [f64; 3]) -> Vector3D {
        Vector3D(array)
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(vector: Vector3D) -> [f64; 3] {
        vector.0
    }
}

impl Index<usize> for Vector3D {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl_arithmetic!(
    Vector3D, Vector3D, Sub, sub, Vector3D,
    self, other,
    Vector3D::new(self[0] - other[0], self[1] - other[1], self[2] - other[2])
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sub() {
        let a = Vector3D::new(2.0, 3.5, 4.8);
        let b = Vector3D::new(6.1, -8.5, 7.3);

        let c = &a - &b;
        assert_relative_eq!(c[0], -4.1, epsilon = 1e-12);
        assert_eq!(c[1], 12.0);
        assert_relative_eq!(c[2], -2.5, epsilon = 1e-12);
        assert_eq!(a - b, c);
    }

    #[test]
    fn norm() {
        assert_eq!(Vector3D::new(3.0, 0.0, 4.0).norm(), 5.0);
        assert_relative_eq!(Vector3D::new(-3.0, 4.0, 12.0).norm(), 13.0, max_relative = 1e-15);
        assert_eq!(Vector3D::zero().norm(), 0.0);

        // squaring these components would overflow
        let large = Vector3D::new(3e200, -4e200, 0.0);
        assert_relative_eq!(large.norm(), 5e200, max_relative = 1e-15);

        // and squaring these would underflow to zero
        let small = Vector3D::new(3e-200, 4e-200, 0.0);
        assert_relative_eq!(small.norm(), 5e-200, max_relative = 1e-15);
    }

    #[test]
    fn finite() {
        assert!(Vector3D::new(1.0, -1e300, 0.0).is_finite());
        assert!(!Vector3D::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vector3D::new(0.0, f64::INFINITY, 0.0).is_finite());
        assert!(!Vector3D::new(0.0, 0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn conversions() {
        let a = Vector3D::from([2.1, 3.5, 4.8]);
        assert_eq!(a[0], 2.1);
        assert_eq!(a[1], 3.5);
        assert_eq!(a[2], 4.8);
        assert_eq!(<[f64; 3]>::from(a), [2.1, 3.5, 4.8]);
    }

    #[test]
    fn serde() {
        let a = Vector3D::new(2.5, -3.0, 0.0);
        assert_eq!(serde_json::to_string(&a).unwrap(), "[2.5,-3.0,0.0]");

        let b: Vector3D = serde_json::from_str("[2.5, -3, 0]").unwrap();
        assert_eq!(a, b);
    }
}
