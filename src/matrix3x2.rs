//! 3x2 affine matrix implementation (2D transforms).

use crate::{Matrix2, Matrix3, Matrix4, Vector2};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D affine transform stored as a 3x2 matrix in column-major order:
/// two linear columns followed by a translation column. The implicit
/// bottom row is [0, 0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix3x2 {
    /// Matrix elements in column-major order:
    /// [m00, m10, m01, m11, m02, m12] with (m02, m12) the translation.
    pub elements: [f32; 6],
}

impl Default for Matrix3x2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix3x2 {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Zero matrix.
    pub const ZERO: Self = Self { elements: [0.0; 6] };

    /// Create a new Matrix3x2 from elements in row-major order.
    #[inline]
    pub const fn new(m00: f32, m01: f32, m02: f32, m10: f32, m11: f32, m12: f32) -> Self {
        Self {
            elements: [m00, m10, m01, m11, m02, m12],
        }
    }

    /// Create from a column-major array.
    #[inline]
    pub const fn from_cols_array(elements: [f32; 6]) -> Self {
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
    pub fn copy(&mut self, m: &Matrix3x2) -> &mut Self {
        self.elements = m.elements;
        self
    }

    /// Set elements from row-major values.
    #[inline]
    pub fn set(&mut self, m00: f32, m01: f32, m02: f32, m10: f32, m11: f32, m12: f32) -> &mut Self {
        self.elements = [m00, m10, m01, m11, m02, m12];
        self
    }

    /// Create a translation matrix.
    pub fn from_translation(x: f32, y: f32) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a scale matrix.
    pub fn from_scale(x: f32, y: f32) -> Self {
        Self {
            elements: [x, 0.0, 0.0, y, 0.0, 0.0],
        }
    }

    /// Create a rotation matrix.
    pub fn from_rotation(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            elements: [c, s, -s, c, 0.0, 0.0],
        }
    }

    /// Create a 2D orthographic projection matrix.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        let w = 1.0 / (right - left);
        let h = 1.0 / (top - bottom);
        Self {
            elements: [
                2.0 * w,
                0.0,
                0.0,
                2.0 * h,
                -(right + left) * w,
                -(top + bottom) * h,
            ],
        }
    }

    /// Widen a 2x2 linear matrix with zero translation.
    pub fn from_matrix2(m: &Matrix2) -> Self {
        let e = &m.elements;
        Self {
            elements: [e[0], e[1], e[2], e[3], 0.0, 0.0],
        }
    }

    /// Take the upper-left 2x2 of a 3x3 matrix, with zero translation.
    /// Lossy: the third row and column are dropped.
    pub fn from_matrix3(m: &Matrix3) -> Self {
        let e = &m.elements;
        Self {
            elements: [e[0], e[1], e[3], e[4], 0.0, 0.0],
        }
    }

    /// Take the upper-left 2x2 and the x/y translation of a 4x4 matrix.
    /// Lossy: everything involving the z axis is dropped.
    pub fn from_matrix4(m: &Matrix4) -> Self {
        let e = &m.elements;
        Self {
            elements: [e[0], e[1], e[4], e[5], e[12], e[13]],
        }
    }

    /// Multiply this affine transform by another.
    pub fn multiply(&self, other: &Matrix3x2) -> Self {
        let a = &self.elements;
        let b = &other.elements;
        Self {
            elements: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Pre-multiply this matrix by another.
    pub fn premultiply(&self, other: &Matrix3x2) -> Self {
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

    /// Transpose the linear part across its diagonal. The translation is
    /// untouched.
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        self.elements.swap(1, 2);
        self
    }

    /// Calculate the determinant of the linear part.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let e = &self.elements;
        e[0] * e[3] - e[2] * e[1]
    }

    /// Invert this affine transform: the 2x2 linear part is inverted with
    /// the adjugate formula and the translation recomputed.
    ///
    /// If the determinant is exactly zero the matrix becomes the identity.
    /// A near-singular matrix with a tiny nonzero determinant is NOT caught
    /// and inverts to a numerically unstable result.
    pub fn invert(&mut self) -> &mut Self {
        let [m00, m10, m01, m11, m02, m12] = self.elements;

        let det = m00 * m11 - m01 * m10;
        if det == 0.0 {
            return self.set_identity();
        }
        let inv = 1.0 / det;

        self.elements = [
            m11 * inv,
            -m10 * inv,
            -m01 * inv,
            m00 * inv,
            (m01 * m12 - m11 * m02) * inv,
            (m10 * m02 - m00 * m12) * inv,
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
    /// as [`invert`](Matrix3x2::invert) on a copy of `other`.
    pub fn set_from_inverse(&mut self, other: &Matrix3x2) -> &mut Self {
        self.elements = other.elements;
        self.invert()
    }

    /// Compose a 2D transform from position, scale and a rotation angle in
    /// radians.
    pub fn compose(position: &Vector2, scale: &Vector2, rotation: f32) -> Self {
        let c = rotation.cos();
        let s = rotation.sin();
        Self {
            elements: [
                c * scale.x,
                s * scale.x,
                -s * scale.y,
                c * scale.y,
                position.x,
                position.y,
            ],
        }
    }

    /// Decompose this transform into (position, scale, rotation angle).
    ///
    /// Scale is the length of each linear column; the angle is recovered
    /// with atan2 from the first column. The 2D path deliberately returns a
    /// scalar angle, not a quaternion.
    pub fn decompose(&self) -> (Vector2, Vector2, f32) {
        let e = &self.elements;

        let sx = Vector2::new(e[0], e[1]).length();
        let sy = Vector2::new(e[2], e[3]).length();

        let position = Vector2::new(e[4], e[5]);
        let scale = Vector2::new(sx, sy);
        let rotation = e[1].atan2(e[0]);

        (position, scale, rotation)
    }

    /// Copy the translation column from another matrix.
    #[inline]
    pub fn copy_position(&mut self, other: &Matrix3x2) -> &mut Self {
        self.elements[4] = other.elements[4];
        self.elements[5] = other.elements[5];
        self
    }

    /// Set the linear part to the rotation of another matrix: its columns
    /// normalized, scale removed. Zero-length columns are zeroed.
    pub fn extract_rotation(&mut self, other: &Matrix3x2) -> &mut Self {
        let e = &other.elements;

        let x = e[0] * e[0] + e[1] * e[1];
        let y = e[2] * e[2] + e[3] * e[3];

        let sx = if x != 0.0 { 1.0 / x.sqrt() } else { 0.0 };
        let sy = if y != 0.0 { 1.0 / y.sqrt() } else { 0.0 };

        self.elements[0] = e[0] * sx;
        self.elements[1] = e[1] * sx;
        self.elements[2] = e[2] * sy;
        self.elements[3] = e[3] * sy;
        self
    }

    /// Point the rotation part from eye toward target.
    pub fn look_at(&mut self, eye: &Vector2, target: &Vector2) -> &mut Self {
        let a = (target.y - eye.y).atan2(target.x - eye.x) - crate::consts::HALF_PI;
        let c = a.cos();
        let s = a.sin();

        self.elements[0] = c;
        self.elements[1] = s;
        self.elements[2] = -s;
        self.elements[3] = c;
        self
    }

    /// Extract the translation column.
    #[inline]
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.elements[4], self.elements[5])
    }

    /// Set the translation column.
    #[inline]
    pub fn set_position(&mut self, position: &Vector2) -> &mut Self {
        self.elements[4] = position.x;
        self.elements[5] = position.y;
        self
    }

    /// Set the linear part to a rotation by angle, discarding scale.
    pub fn set_rotation(&mut self, angle: f32) -> &mut Self {
        let c = angle.cos();
        let s = angle.sin();
        self.elements[0] = c;
        self.elements[1] = s;
        self.elements[2] = -s;
        self.elements[3] = c;
        self
    }

    /// Get the rotation angle of the first column in radians.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.elements[1].atan2(self.elements[0])
    }

    /// Translate in local space (post-multiplies by a translation).
    pub fn translate(&mut self, v: &Vector2) -> &mut Self {
        let e = &mut self.elements;
        e[4] = e[0] * v.x + e[2] * v.y + e[4];
        e[5] = e[1] * v.x + e[3] * v.y + e[5];
        self
    }

    /// Rotate in local space (post-multiplies the linear part by a
    /// rotation). The translation is untouched.
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        let [e0, e1, e2, e3, _, _] = self.elements;
        let c = angle.cos();
        let s = angle.sin();

        self.elements[0] = e0 * c + e2 * s;
        self.elements[1] = e1 * c + e3 * s;
        self.elements[2] = e2 * c - e0 * s;
        self.elements[3] = e3 * c - e1 * s;
        self
    }

    /// Scale in local space (post-multiplies by a scale). The translation
    /// is untouched.
    pub fn scale(&mut self, s: &Vector2) -> &mut Self {
        let e = &mut self.elements;
        e[0] *= s.x;
        e[1] *= s.x;
        e[2] *= s.y;
        e[3] *= s.y;
        self
    }

    /// Transform a point (applies the linear part and translation).
    #[inline]
    pub fn transform_point(&self, v: &Vector2) -> Vector2 {
        let e = &self.elements;
        Vector2 {
            x: e[0] * v.x + e[2] * v.y + e[4],
            y: e[1] * v.x + e[3] * v.y + e[5],
        }
    }

    /// Transform a direction (applies only the linear part).
    #[inline]
    pub fn transform_direction(&self, v: &Vector2) -> Vector2 {
        let e = &self.elements;
        Vector2 {
            x: e[0] * v.x + e[2] * v.y,
            y: e[1] * v.x + e[3] * v.y,
        }
    }

    /// Check if approximately equal to another matrix.
    pub fn approx_eq(&self, other: &Matrix3x2, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl fmt::Display for Matrix3x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.elements;
        write!(
            f,
            "Matrix3x2[\n {}, {}, {},\n {}, {}, {}\n ]",
            e[0], e[2], e[4], e[1], e[3], e[5]
        )
    }
}

impl std::ops::Mul for Matrix3x2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<Vector2> for Matrix3x2 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Vector2 {
        self.transform_point(&rhs)
    }
}

impl From<glam::Affine2> for Matrix3x2 {
    fn from(m: glam::Affine2) -> Self {
        Self {
            elements: m.to_cols_array(),
        }
    }
}

impl From<Matrix3x2> for glam::Affine2 {
    fn from(m: Matrix3x2) -> Self {
        glam::Affine2::from_cols_array(&m.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse() {
        let m = Matrix3x2::compose(&Vector2::new(3.0, -2.0), &Vector2::new(2.0, 0.5), 0.6);
        let inv = m.inverse();
        let id = m.multiply(&inv);
        assert!(id.approx_eq(&Matrix3x2::IDENTITY, 1e-5));
    }

    #[test]
    fn test_singular_inverse_is_identity() {
        let m = Matrix3x2::new(1.0, 2.0, 5.0, 2.0, 4.0, 7.0);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Matrix3x2::IDENTITY);
    }

    #[test]
    fn test_compose_decompose_roundtrip() {
        let position = Vector2::new(10.0, -4.0);
        let scale = Vector2::new(2.0, 3.0);
        let rotation = 0.8;

        let m = Matrix3x2::compose(&position, &scale, rotation);
        let (p, s, r) = m.decompose();

        assert!(p.approx_eq(&position, 1e-4));
        assert!(s.approx_eq(&scale, 1e-4));
        assert!((r - rotation).abs() < 1e-4);
    }

    #[test]
    fn test_transform_point() {
        let m = Matrix3x2::from_translation(5.0, 6.0);
        let p = m.transform_point(&Vector2::new(1.0, 1.0));
        assert!(p.approx_eq(&Vector2::new(6.0, 7.0), 1e-6));
    }

    #[test]
    fn test_translate_is_local() {
        let mut m = Matrix3x2::from_rotation(std::f32::consts::FRAC_PI_2);
        m.translate(&Vector2::new(1.0, 0.0));
        // A local +X step under a 90 degree rotation moves the origin along +Y.
        assert!(m.position().approx_eq(&Vector2::new(0.0, 1.0), 1e-6));
    }
}
