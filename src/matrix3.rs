//! 3x3 Matrix implementation.

use crate::{Matrix2, Matrix4, Quaternion, Vector3};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3x3 matrix stored in column-major order.
/// Represents a 3D linear transform (rotation, scale, shear).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix3 {
    /// Matrix elements in column-major order:
    /// [m00, m10, m20, m01, m11, m21, m02, m12, m22]
    pub elements: [f32; 9],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        elements: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Zero matrix.
    pub const ZERO: Self = Self { elements: [0.0; 9] };

    /// Create a new Matrix3 from elements in row-major order.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self {
            elements: [m00, m10, m20, m01, m11, m21, m02, m12, m22],
        }
    }

    /// Create from a column-major array.
    #[inline]
    pub const fn from_cols_array(elements: [f32; 9]) -> Self {
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
    pub fn copy(&mut self, m: &Matrix3) -> &mut Self {
        self.elements = m.elements;
        self
    }

    /// Set elements from row-major values.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &mut self,
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> &mut Self {
        self.elements = [m00, m10, m20, m01, m11, m21, m02, m12, m22];
        self
    }

    /// Create a scale matrix.
    pub fn from_scale(x: f32, y: f32, z: f32) -> Self {
        Self {
            elements: [x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, z],
        }
    }

    /// Create a rotation matrix around the X axis.
    pub fn from_rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            elements: [1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c],
        }
    }

    /// Create a rotation matrix around the Y axis.
    pub fn from_rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            elements: [c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c],
        }
    }

    /// Create a rotation matrix around the Z axis.
    pub fn from_rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            elements: [c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Create a rotation matrix from a quaternion, using the closed-form
    /// doubled-product expansion. Always well-defined, no branching.
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;
        let xx = q.x * x2;
        let xy = q.x * y2;
        let xz = q.x * z2;
        let yy = q.y * y2;
        let yz = q.y * z2;
        let zz = q.z * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        Self {
            elements: [
                1.0 - (yy + zz),
                xy + wz,
                xz - wy,
                xy - wz,
                1.0 - (xx + zz),
                yz + wx,
                xz + wy,
                yz - wx,
                1.0 - (xx + yy),
            ],
        }
    }

    /// Widen a 2x2 linear matrix, with m22 = 1.
    pub fn from_matrix2(m: &Matrix2) -> Self {
        let e = &m.elements;
        Self {
            elements: [e[0], e[1], 0.0, e[2], e[3], 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Take the upper-left 3x3 of a 4x4 matrix.
    /// Lossy: the translation and bottom row are dropped.
    pub fn from_matrix4(m: &Matrix4) -> Self {
        let e = &m.elements;
        Self {
            elements: [e[0], e[1], e[2], e[4], e[5], e[6], e[8], e[9], e[10]],
        }
    }

    /// Multiply this matrix by another.
    pub fn multiply(&self, other: &Matrix3) -> Self {
        let a = &self.elements;
        let b = &other.elements;
        Self {
            elements: [
                a[0] * b[0] + a[3] * b[1] + a[6] * b[2],
                a[1] * b[0] + a[4] * b[1] + a[7] * b[2],
                a[2] * b[0] + a[5] * b[1] + a[8] * b[2],
                a[0] * b[3] + a[3] * b[4] + a[6] * b[5],
                a[1] * b[3] + a[4] * b[4] + a[7] * b[5],
                a[2] * b[3] + a[5] * b[4] + a[8] * b[5],
                a[0] * b[6] + a[3] * b[7] + a[6] * b[8],
                a[1] * b[6] + a[4] * b[7] + a[7] * b[8],
                a[2] * b[6] + a[5] * b[7] + a[8] * b[8],
            ],
        }
    }

    /// Pre-multiply this matrix by another.
    pub fn premultiply(&self, other: &Matrix3) -> Self {
        other.multiply(self)
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
        self.elements.swap(1, 3);
        self.elements.swap(2, 6);
        self.elements.swap(5, 7);
        self
    }

    /// Return the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Calculate the determinant, expanding along the first column with the
    /// same cofactors the inverse uses.
    pub fn determinant(&self) -> f32 {
        let e = &self.elements;
        let m00 = e[0]; let m01 = e[3]; let m02 = e[6];
        let m10 = e[1]; let m11 = e[4]; let m12 = e[7];
        let m20 = e[2]; let m21 = e[5]; let m22 = e[8];

        let t0 = m11 * m22 - m12 * m21;
        let t1 = m02 * m21 - m01 * m22;
        let t2 = m01 * m12 - m02 * m11;

        m00 * t0 + m10 * t1 + m20 * t2
    }

    /// Invert this matrix (transposed cofactor matrix over determinant).
    ///
    /// If the determinant is exactly zero the matrix becomes the identity.
    /// A near-singular matrix with a tiny nonzero determinant is NOT caught
    /// and inverts to a numerically unstable result.
    pub fn invert(&mut self) -> &mut Self {
        let e = &self.elements;
        let m00 = e[0]; let m01 = e[3]; let m02 = e[6];
        let m10 = e[1]; let m11 = e[4]; let m12 = e[7];
        let m20 = e[2]; let m21 = e[5]; let m22 = e[8];

        let t0 = m11 * m22 - m12 * m21;
        let t1 = m02 * m21 - m01 * m22;
        let t2 = m01 * m12 - m02 * m11;

        let det = m00 * t0 + m10 * t1 + m20 * t2;

        if det == 0.0 {
            return self.set_identity();
        }
        let inv = 1.0 / det;

        self.elements = [
            t0 * inv,
            (m12 * m20 - m10 * m22) * inv,
            (m10 * m21 - m11 * m20) * inv,
            t1 * inv,
            (m00 * m22 - m02 * m20) * inv,
            (m01 * m20 - m00 * m21) * inv,
            t2 * inv,
            (m02 * m10 - m00 * m12) * inv,
            (m00 * m11 - m01 * m10) * inv,
        ];
        self
    }

    /// Return the inverse of this matrix.
    pub fn inverse(&self) -> Self {
        let mut m = *self;
        m.invert();
        m
    }

    /// Set this matrix to the inverse of another. Produces the same numbers
    /// as [`invert`](Matrix3::invert) on a copy of `other`.
    pub fn set_from_inverse(&mut self, other: &Matrix3) -> &mut Self {
        self.elements = other.elements;
        self.invert()
    }

    /// Set this matrix to the inverse of the upper-left 3x3 of a Matrix4.
    /// Useful as a normal-matrix helper. Singular input yields identity.
    pub fn set_from_matrix4_inverse(&mut self, other: &Matrix4) -> &mut Self {
        self.elements = Self::from_matrix4(other).elements;
        self.invert()
    }

    /// Transform a Vector3.
    #[inline]
    pub fn transform_vector(&self, v: &Vector3) -> Vector3 {
        let e = &self.elements;
        Vector3 {
            x: e[0] * v.x + e[3] * v.y + e[6] * v.z,
            y: e[1] * v.x + e[4] * v.y + e[7] * v.z,
            z: e[2] * v.x + e[5] * v.y + e[8] * v.z,
        }
    }

    /// Check if approximately equal to another matrix.
    pub fn approx_eq(&self, other: &Matrix3, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.elements;
        write!(
            f,
            "Matrix3[\n {}, {}, {},\n {}, {}, {},\n {}, {}, {}\n ]",
            e[0], e[3], e[6], e[1], e[4], e[7], e[2], e[5], e[8]
        )
    }
}

impl std::ops::Mul for Matrix3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform_vector(&rhs)
    }
}

impl From<glam::Mat3> for Matrix3 {
    fn from(m: glam::Mat3) -> Self {
        Self {
            elements: m.to_cols_array(),
        }
    }
}

impl From<Matrix3> for glam::Mat3 {
    fn from(m: Matrix3) -> Self {
        glam::Mat3::from_cols_array(&m.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse() {
        let m = Matrix3::new(
            2.0, 0.0, 1.0,
            1.0, 3.0, -1.0,
            0.0, 2.0, 4.0,
        );
        let id = m.multiply(&m.inverse());
        assert!(id.approx_eq(&Matrix3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_singular_inverse_is_identity() {
        // Second row is twice the first.
        let m = Matrix3::new(
            1.0, 2.0, 3.0,
            2.0, 4.0, 6.0,
            0.0, 1.0, 1.0,
        );
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Matrix3::IDENTITY);
    }

    #[test]
    fn test_rotation_x_fixes_x_axis() {
        let m = Matrix3::from_rotation_x(1.1);
        let v = m.transform_vector(&Vector3::UNIT_X);
        assert!(v.approx_eq(&Vector3::UNIT_X, 1e-6));
    }

    #[test]
    fn test_from_quaternion_matches_rotation_z() {
        let q = Quaternion::from_axis_angle(&Vector3::UNIT_Z, 0.9);
        let m = Matrix3::from_quaternion(&q);
        assert!(m.approx_eq(&Matrix3::from_rotation_z(0.9), 1e-6));
    }

    #[test]
    fn test_normal_matrix_of_rotation_is_inverse_rotation() {
        let r = Matrix4::from_rotation_y(0.4);
        let mut n = Matrix3::identity();
        n.set_from_matrix4_inverse(&r);
        assert!(n.approx_eq(&Matrix3::from_rotation_y(-0.4), 1e-6));
    }
}
