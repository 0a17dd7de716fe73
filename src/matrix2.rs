//! 2x2 Matrix implementation.

use crate::Matrix3x2;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2x2 matrix stored in column-major order.
/// Represents a 2D linear transform (rotation, scale, shear).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix2 {
    /// Matrix elements in column-major order: [m00, m10, m01, m11].
    pub elements: [f32; 4],
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix2 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        elements: [1.0, 0.0, 0.0, 1.0],
    };

    /// Zero matrix.
    pub const ZERO: Self = Self { elements: [0.0; 4] };

    /// Create a new Matrix2 from elements in row-major order.
    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self {
            elements: [m00, m10, m01, m11],
        }
    }

    /// Create from a column-major array.
    #[inline]
    pub const fn from_cols_array(elements: [f32; 4]) -> Self {
        Self { elements }
    }

    /// Create identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Set to identity matrix.
    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        self.elements = Self::IDENTITY.elements;
        self
    }

    /// Copy from another matrix.
    #[inline]
    pub fn copy(&mut self, m: &Matrix2) -> &mut Self {
        self.elements = m.elements;
        self
    }

    /// Set elements from row-major values.
    #[inline]
    pub fn set(&mut self, m00: f32, m01: f32, m10: f32, m11: f32) -> &mut Self {
        self.elements = [m00, m10, m01, m11];
        self
    }

    /// Create a scale matrix.
    pub fn from_scale(x: f32, y: f32) -> Self {
        Self {
            elements: [x, 0.0, 0.0, y],
        }
    }

    /// Create a rotation matrix.
    pub fn from_rotation(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            elements: [c, s, -s, c],
        }
    }

    /// Create from the linear part of a 3x2 affine matrix, dropping its
    /// translation.
    pub fn from_matrix3x2(m: &Matrix3x2) -> Self {
        let e = &m.elements;
        Self {
            elements: [e[0], e[1], e[2], e[3]],
        }
    }

    /// Get the rotation angle of the first column in radians.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.elements[1].atan2(self.elements[0])
    }

    /// Multiply this matrix by another.
    pub fn multiply(&self, other: &Matrix2) -> Self {
        let a = &self.elements;
        let b = &other.elements;
        Self {
            elements: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
            ],
        }
    }

    /// Pre-multiply this matrix by another.
    pub fn premultiply(&self, other: &Matrix2) -> Self {
        other.multiply(self)
    }

    /// Rotate this matrix by an angle (post-multiplies by a rotation).
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        let [e0, e1, e2, e3] = self.elements;
        let c = angle.cos();
        let s = angle.sin();

        self.elements = [
            e0 * c + e2 * s,
            e1 * c + e3 * s,
            e2 * c - e0 * s,
            e3 * c - e1 * s,
        ];
        self
    }

    /// Multiply by a scalar.
    #[inline]
    pub fn multiply_scalar(&mut self, s: f32) -> &mut Self {
        for e in &mut self.elements {
            *e *= s;
        }
        self
    }

    /// Divide by a scalar. Dividing by zero yields the zero matrix.
    #[inline]
    pub fn divide_scalar(&mut self, s: f32) -> &mut Self {
        let inv = if s != 0.0 { 1.0 / s } else { 0.0 };
        self.multiply_scalar(inv)
    }

    /// Transpose this matrix.
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        self.elements.swap(1, 2);
        self
    }

    /// Return the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Calculate the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let e = &self.elements;
        e[0] * e[3] - e[2] * e[1]
    }

    /// Invert this matrix (adjugate over determinant).
    ///
    /// If the determinant is exactly zero the matrix becomes the identity.
    /// A near-singular matrix with a tiny nonzero determinant is NOT caught
    /// and inverts to a numerically unstable result.
    pub fn invert(&mut self) -> &mut Self {
        let [m00, m10, m01, m11] = self.elements;

        let det = m00 * m11 - m01 * m10;
        if det == 0.0 {
            return self.set_identity();
        }
        let inv = 1.0 / det;

        self.elements = [m11 * inv, -m10 * inv, -m01 * inv, m00 * inv];
        self
    }

    /// Return the inverse of this matrix.
    pub fn inverse(&self) -> Self {
        let mut m = *self;
        m.invert();
        m
    }

    /// Set this matrix to the inverse of another. Produces the same numbers
    /// as [`invert`](Matrix2::invert) on a copy of `other`.
    pub fn set_from_inverse(&mut self, other: &Matrix2) -> &mut Self {
        self.elements = other.elements;
        self.invert()
    }

    /// Check if approximately equal to another matrix.
    pub fn approx_eq(&self, other: &Matrix2, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.elements;
        write!(f, "Matrix2[\n {}, {},\n {}, {}\n ]", e[0], e[2], e[1], e[3])
    }
}

impl std::ops::Mul for Matrix2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl From<glam::Mat2> for Matrix2 {
    fn from(m: glam::Mat2) -> Self {
        Self {
            elements: m.to_cols_array(),
        }
    }
}

impl From<Matrix2> for glam::Mat2 {
    fn from(m: Matrix2) -> Self {
        glam::Mat2::from_cols_array(&m.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse() {
        let m = Matrix2::new(4.0, 7.0, 2.0, 6.0);
        let inv = m.inverse();
        let id = m.multiply(&inv);
        assert!(id.approx_eq(&Matrix2::IDENTITY, 1e-5));
    }

    #[test]
    fn test_singular_inverse_is_identity() {
        let m = Matrix2::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Matrix2::IDENTITY);
    }

    #[test]
    fn test_set_from_inverse_matches_invert() {
        let m = Matrix2::new(3.0, 1.0, -2.0, 5.0);
        let mut a = m;
        a.invert();
        let mut b = Matrix2::identity();
        b.set_from_inverse(&m);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotation_roundtrip() {
        let m = Matrix2::from_rotation(0.7);
        assert!((m.rotation() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_composes() {
        let mut m = Matrix2::from_rotation(0.3);
        m.rotate(0.4);
        assert!(m.approx_eq(&Matrix2::from_rotation(0.7), 1e-5));
    }
}
