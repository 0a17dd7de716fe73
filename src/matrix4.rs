//! 4x4 Matrix implementation.

use crate::{Matrix3, Quaternion, Vector3};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 4x4 matrix stored in column-major order.
/// Represents a 3D affine transform; [`compose`](Matrix4::compose) keeps
/// the bottom row at [0, 0, 0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix4 {
    /// Matrix elements in column-major order:
    /// [m00, m10, m20, m30, m01, m11, m21, m31, m02, m12, m22, m32, m03, m13, m23, m33]
    pub elements: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        elements: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Zero matrix.
    pub const ZERO: Self = Self {
        elements: [0.0; 16],
    };

    /// Create a new Matrix4 from elements in row-major order.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            elements: [
                m00, m10, m20, m30,
                m01, m11, m21, m31,
                m02, m12, m22, m32,
                m03, m13, m23, m33,
            ],
        }
    }

    /// Create from a column-major array.
    #[inline]
    pub const fn from_cols_array(elements: [f32; 16]) -> Self {
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
    pub fn copy(&mut self, m: &Matrix4) -> &mut Self {
        self.elements = m.elements;
        self
    }

    /// Set elements from row-major values.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &mut self,
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> &mut Self {
        self.elements = [
            m00, m10, m20, m30,
            m01, m11, m21, m31,
            m02, m12, m22, m32,
            m03, m13, m23, m33,
        ];
        self
    }

    /// Extract the position (translation) column.
    #[inline]
    pub fn position(&self) -> Vector3 {
        Vector3 {
            x: self.elements[12],
            y: self.elements[13],
            z: self.elements[14],
        }
    }

    /// Set the position (translation) column.
    #[inline]
    pub fn set_position(&mut self, v: &Vector3) -> &mut Self {
        self.elements[12] = v.x;
        self.elements[13] = v.y;
        self.elements[14] = v.z;
        self
    }

    /// Copy the translation column from another matrix.
    #[inline]
    pub fn copy_position(&mut self, other: &Matrix4) -> &mut Self {
        self.elements[12] = other.elements[12];
        self.elements[13] = other.elements[13];
        self.elements[14] = other.elements[14];
        self
    }

    /// Extract the per-axis scale (length of each linear column).
    pub fn scale_of(&self) -> Vector3 {
        let e = &self.elements;
        Vector3 {
            x: Vector3::new(e[0], e[1], e[2]).length(),
            y: Vector3::new(e[4], e[5], e[6]).length(),
            z: Vector3::new(e[8], e[9], e[10]).length(),
        }
    }

    /// Compose an affine transform from position, per-axis scale and a
    /// rotation quaternion. The bottom row is fixed to [0, 0, 0, 1].
    pub fn compose(position: &Vector3, scale: &Vector3, rotation: &Quaternion) -> Self {
        let x2 = rotation.x + rotation.x;
        let y2 = rotation.y + rotation.y;
        let z2 = rotation.z + rotation.z;
        let xx = rotation.x * x2;
        let xy = rotation.x * y2;
        let xz = rotation.x * z2;
        let yy = rotation.y * y2;
        let yz = rotation.y * z2;
        let zz = rotation.z * z2;
        let wx = rotation.w * x2;
        let wy = rotation.w * y2;
        let wz = rotation.w * z2;

        Self {
            elements: [
                (1.0 - (yy + zz)) * scale.x,
                (xy + wz) * scale.x,
                (xz - wy) * scale.x,
                0.0,
                (xy - wz) * scale.y,
                (1.0 - (xx + zz)) * scale.y,
                (yz + wx) * scale.y,
                0.0,
                (xz + wy) * scale.z,
                (yz - wx) * scale.z,
                (1.0 - (xx + yy)) * scale.z,
                0.0,
                position.x,
                position.y,
                position.z,
                1.0,
            ],
        }
    }

    /// Decompose this transform into (position, scale, rotation).
    ///
    /// Scale is the length of each linear column; the linear part is
    /// normalized by it and the rotation extracted with the trace-branched
    /// formula. A zero scale component divides by zero here and propagates
    /// Inf/NaN into the rotation - avoiding zero scale is the caller's
    /// responsibility.
    pub fn decompose(&self) -> (Vector3, Vector3, Quaternion) {
        let e = &self.elements;

        let sx = Vector3::new(e[0], e[1], e[2]).length();
        let sy = Vector3::new(e[4], e[5], e[6]).length();
        let sz = Vector3::new(e[8], e[9], e[10]).length();

        let position = Vector3::new(e[12], e[13], e[14]);
        let scale = Vector3::new(sx, sy, sz);

        let inv_sx = 1.0 / sx;
        let inv_sy = 1.0 / sy;
        let inv_sz = 1.0 / sz;

        let rotation = Quaternion::from_rotation_elements(
            e[0] * inv_sx, e[4] * inv_sy, e[8] * inv_sz,
            e[1] * inv_sx, e[5] * inv_sy, e[9] * inv_sz,
            e[2] * inv_sx, e[6] * inv_sy, e[10] * inv_sz,
        );

        (position, scale, rotation)
    }

    /// Create a translation matrix.
    pub fn from_translation(v: &Vector3) -> Self {
        Self {
            elements: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                v.x, v.y, v.z, 1.0,
            ],
        }
    }

    /// Create a scale matrix.
    pub fn from_scale(v: &Vector3) -> Self {
        Self {
            elements: [
                v.x, 0.0, 0.0, 0.0,
                0.0, v.y, 0.0, 0.0,
                0.0, 0.0, v.z, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Create a rotation matrix around the X axis.
    pub fn from_rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            elements: [
                1.0, 0.0, 0.0, 0.0,
                0.0, c, s, 0.0,
                0.0, -s, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Create a rotation matrix around the Y axis.
    pub fn from_rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            elements: [
                c, 0.0, -s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                s, 0.0, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Create a rotation matrix around the Z axis.
    pub fn from_rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            elements: [
                c, s, 0.0, 0.0,
                -s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Create a rotation matrix around an arbitrary unit axis.
    pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        Self {
            elements: [
                t * x * x + c,
                t * x * y + s * z,
                t * x * z - s * y,
                0.0,
                t * x * y - s * z,
                t * y * y + c,
                t * y * z + s * x,
                0.0,
                t * x * z + s * y,
                t * y * z - s * x,
                t * z * z + c,
                0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
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
                0.0,
                xy - wz,
                1.0 - (xx + zz),
                yz + wx,
                0.0,
                xz + wy,
                yz - wx,
                1.0 - (xx + yy),
                0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Widen a 3x3 linear matrix into an affine transform with zero
    /// translation.
    pub fn from_matrix3(m: &Matrix3) -> Self {
        let e = &m.elements;
        Self {
            elements: [
                e[0], e[1], e[2], 0.0,
                e[3], e[4], e[5], 0.0,
                e[6], e[7], e[8], 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Point the rotation basis from eye toward target. Only the linear
    /// part is written; the translation is untouched.
    pub fn look_at(&mut self, eye: &Vector3, target: &Vector3, up: &Vector3) -> &mut Self {
        let mut z = *target - *eye;
        z.normalize();

        let mut x = up.cross(&z);
        x.normalize();

        let y = z.cross(&x);

        let e = &mut self.elements;
        e[0] = x.x;
        e[1] = x.y;
        e[2] = x.z;
        e[4] = y.x;
        e[5] = y.y;
        e[6] = y.z;
        e[8] = z.x;
        e[9] = z.y;
        e[10] = z.z;
        self
    }

    /// Multiply this matrix by another.
    pub fn multiply(&self, other: &Matrix4) -> Self {
        let a = &self.elements;
        let b = &other.elements;

        Self {
            elements: [
                a[0] * b[0] + a[4] * b[1] + a[8] * b[2] + a[12] * b[3],
                a[1] * b[0] + a[5] * b[1] + a[9] * b[2] + a[13] * b[3],
                a[2] * b[0] + a[6] * b[1] + a[10] * b[2] + a[14] * b[3],
                a[3] * b[0] + a[7] * b[1] + a[11] * b[2] + a[15] * b[3],

                a[0] * b[4] + a[4] * b[5] + a[8] * b[6] + a[12] * b[7],
                a[1] * b[4] + a[5] * b[5] + a[9] * b[6] + a[13] * b[7],
                a[2] * b[4] + a[6] * b[5] + a[10] * b[6] + a[14] * b[7],
                a[3] * b[4] + a[7] * b[5] + a[11] * b[6] + a[15] * b[7],

                a[0] * b[8] + a[4] * b[9] + a[8] * b[10] + a[12] * b[11],
                a[1] * b[8] + a[5] * b[9] + a[9] * b[10] + a[13] * b[11],
                a[2] * b[8] + a[6] * b[9] + a[10] * b[10] + a[14] * b[11],
                a[3] * b[8] + a[7] * b[9] + a[11] * b[10] + a[15] * b[11],

                a[0] * b[12] + a[4] * b[13] + a[8] * b[14] + a[12] * b[15],
                a[1] * b[12] + a[5] * b[13] + a[9] * b[14] + a[13] * b[15],
                a[2] * b[12] + a[6] * b[13] + a[10] * b[14] + a[14] * b[15],
                a[3] * b[12] + a[7] * b[13] + a[11] * b[14] + a[15] * b[15],
            ],
        }
    }

    /// Pre-multiply this matrix by another.
    pub fn premultiply(&self, other: &Matrix4) -> Self {
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

    /// Calculate the determinant, expanding along the first column with the
    /// same cofactors the inverse uses, so the two always agree.
    pub fn determinant(&self) -> f32 {
        let e = &self.elements;

        let n11 = e[0]; let n12 = e[4]; let n13 = e[8]; let n14 = e[12];
        let n21 = e[1]; let n22 = e[5]; let n23 = e[9]; let n24 = e[13];
        let n31 = e[2]; let n32 = e[6]; let n33 = e[10]; let n34 = e[14];
        let n41 = e[3]; let n42 = e[7]; let n43 = e[11]; let n44 = e[15];

        let t11 = n23 * n34 * n42 - n24 * n33 * n42 + n24 * n32 * n43 - n22 * n34 * n43 - n23 * n32 * n44 + n22 * n33 * n44;
        let t12 = n14 * n33 * n42 - n13 * n34 * n42 - n14 * n32 * n43 + n12 * n34 * n43 + n13 * n32 * n44 - n12 * n33 * n44;
        let t13 = n13 * n24 * n42 - n14 * n23 * n42 + n14 * n22 * n43 - n12 * n24 * n43 - n13 * n22 * n44 + n12 * n23 * n44;
        let t14 = n14 * n23 * n32 - n13 * n24 * n32 - n14 * n22 * n33 + n12 * n24 * n33 + n13 * n22 * n34 - n12 * n23 * n34;

        n11 * t11 + n21 * t12 + n31 * t13 + n41 * t14
    }

    /// Invert this matrix (full 16-cofactor expansion).
    ///
    /// If the determinant is exactly zero the matrix becomes the identity.
    /// A near-singular matrix with a tiny nonzero determinant is NOT caught
    /// and inverts to a numerically unstable result.
    pub fn invert(&mut self) -> &mut Self {
        let e = &self.elements;

        let n11 = e[0]; let n12 = e[4]; let n13 = e[8]; let n14 = e[12];
        let n21 = e[1]; let n22 = e[5]; let n23 = e[9]; let n24 = e[13];
        let n31 = e[2]; let n32 = e[6]; let n33 = e[10]; let n34 = e[14];
        let n41 = e[3]; let n42 = e[7]; let n43 = e[11]; let n44 = e[15];

        let t11 = n23 * n34 * n42 - n24 * n33 * n42 + n24 * n32 * n43 - n22 * n34 * n43 - n23 * n32 * n44 + n22 * n33 * n44;
        let t12 = n14 * n33 * n42 - n13 * n34 * n42 - n14 * n32 * n43 + n12 * n34 * n43 + n13 * n32 * n44 - n12 * n33 * n44;
        let t13 = n13 * n24 * n42 - n14 * n23 * n42 + n14 * n22 * n43 - n12 * n24 * n43 - n13 * n22 * n44 + n12 * n23 * n44;
        let t14 = n14 * n23 * n32 - n13 * n24 * n32 - n14 * n22 * n33 + n12 * n24 * n33 + n13 * n22 * n34 - n12 * n23 * n34;

        let det = n11 * t11 + n21 * t12 + n31 * t13 + n41 * t14;

        if det == 0.0 {
            return self.set_identity();
        }
        let det_inv = 1.0 / det;

        self.elements = [
            t11 * det_inv,
            (n24 * n33 * n41 - n23 * n34 * n41 - n24 * n31 * n43 + n21 * n34 * n43 + n23 * n31 * n44 - n21 * n33 * n44) * det_inv,
            (n22 * n34 * n41 - n24 * n32 * n41 + n24 * n31 * n42 - n21 * n34 * n42 - n22 * n31 * n44 + n21 * n32 * n44) * det_inv,
            (n23 * n32 * n41 - n22 * n33 * n41 - n23 * n31 * n42 + n21 * n33 * n42 + n22 * n31 * n43 - n21 * n32 * n43) * det_inv,
            t12 * det_inv,
            (n13 * n34 * n41 - n14 * n33 * n41 + n14 * n31 * n43 - n11 * n34 * n43 - n13 * n31 * n44 + n11 * n33 * n44) * det_inv,
            (n14 * n32 * n41 - n12 * n34 * n41 - n14 * n31 * n42 + n11 * n34 * n42 + n12 * n31 * n44 - n11 * n32 * n44) * det_inv,
            (n12 * n33 * n41 - n13 * n32 * n41 + n13 * n31 * n42 - n11 * n33 * n42 - n12 * n31 * n43 + n11 * n32 * n43) * det_inv,
            t13 * det_inv,
            (n14 * n23 * n41 - n13 * n24 * n41 - n14 * n21 * n43 + n11 * n24 * n43 + n13 * n21 * n44 - n11 * n23 * n44) * det_inv,
            (n12 * n24 * n41 - n14 * n22 * n41 + n14 * n21 * n42 - n11 * n24 * n42 - n12 * n21 * n44 + n11 * n22 * n44) * det_inv,
            (n13 * n22 * n41 - n12 * n23 * n41 - n13 * n21 * n42 + n11 * n23 * n42 + n12 * n21 * n43 - n11 * n22 * n43) * det_inv,
            t14 * det_inv,
            (n13 * n24 * n31 - n14 * n23 * n31 + n14 * n21 * n33 - n11 * n24 * n33 - n13 * n21 * n34 + n11 * n23 * n34) * det_inv,
            (n14 * n22 * n31 - n12 * n24 * n31 - n14 * n21 * n32 + n11 * n24 * n32 + n12 * n21 * n34 - n11 * n22 * n34) * det_inv,
            (n12 * n23 * n31 - n13 * n22 * n31 + n13 * n21 * n32 - n11 * n23 * n32 - n12 * n21 * n33 + n11 * n22 * n33) * det_inv,
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
    /// as [`invert`](Matrix4::invert) on a copy of `other`.
    pub fn set_from_inverse(&mut self, other: &Matrix4) -> &mut Self {
        self.elements = other.elements;
        self.invert()
    }

    /// Transpose this matrix.
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        self.elements.swap(1, 4);
        self.elements.swap(2, 8);
        self.elements.swap(3, 12);
        self.elements.swap(6, 9);
        self.elements.swap(7, 13);
        self.elements.swap(11, 14);
        self
    }

    /// Return the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Translate in local space (post-multiplies by a translation).
    pub fn translate(&mut self, v: &Vector3) -> &mut Self {
        let e = &mut self.elements;
        e[12] = e[0] * v.x + e[4] * v.y + e[8] * v.z + e[12];
        e[13] = e[1] * v.x + e[5] * v.y + e[9] * v.z + e[13];
        e[14] = e[2] * v.x + e[6] * v.y + e[10] * v.z + e[14];
        e[15] = e[3] * v.x + e[7] * v.y + e[11] * v.z + e[15];
        self
    }

    /// Rotate in local space around the X axis (post-multiplies by a
    /// rotation).
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        let c = angle.cos();
        let s = angle.sin();
        let e = &mut self.elements;
        let (m01, m11, m21, m31) = (e[4], e[5], e[6], e[7]);
        let (m02, m12, m22, m32) = (e[8], e[9], e[10], e[11]);

        e[4] = c * m01 + s * m02;
        e[5] = c * m11 + s * m12;
        e[6] = c * m21 + s * m22;
        e[7] = c * m31 + s * m32;

        e[8] = c * m02 - s * m01;
        e[9] = c * m12 - s * m11;
        e[10] = c * m22 - s * m21;
        e[11] = c * m32 - s * m31;
        self
    }

    /// Rotate in local space around the Y axis (post-multiplies by a
    /// rotation).
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        let c = angle.cos();
        let s = angle.sin();
        let e = &mut self.elements;
        let (m00, m10, m20, m30) = (e[0], e[1], e[2], e[3]);
        let (m02, m12, m22, m32) = (e[8], e[9], e[10], e[11]);

        e[0] = c * m00 - s * m02;
        e[1] = c * m10 - s * m12;
        e[2] = c * m20 - s * m22;
        e[3] = c * m30 - s * m32;

        e[8] = c * m02 + s * m00;
        e[9] = c * m12 + s * m10;
        e[10] = c * m22 + s * m20;
        e[11] = c * m32 + s * m30;
        self
    }

    /// Rotate in local space around the Z axis (post-multiplies by a
    /// rotation).
    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        let c = angle.cos();
        let s = angle.sin();
        let e = &mut self.elements;
        let (m00, m10, m20, m30) = (e[0], e[1], e[2], e[3]);
        let (m01, m11, m21, m31) = (e[4], e[5], e[6], e[7]);

        e[0] = c * m00 + s * m01;
        e[1] = c * m10 + s * m11;
        e[2] = c * m20 + s * m21;
        e[3] = c * m30 + s * m31;

        e[4] = c * m01 - s * m00;
        e[5] = c * m11 - s * m10;
        e[6] = c * m21 - s * m20;
        e[7] = c * m31 - s * m30;
        self
    }

    /// Scale in local space (post-multiplies by a scale).
    pub fn scale(&mut self, s: &Vector3) -> &mut Self {
        let e = &mut self.elements;
        e[0] *= s.x;
        e[1] *= s.x;
        e[2] *= s.x;
        e[3] *= s.x;

        e[4] *= s.y;
        e[5] *= s.y;
        e[6] *= s.y;
        e[7] *= s.y;

        e[8] *= s.z;
        e[9] *= s.z;
        e[10] *= s.z;
        e[11] *= s.z;
        self
    }

    /// Set the linear part to the rotation of another matrix: its columns
    /// normalized, scale removed. Zero-length columns are zeroed.
    pub fn extract_rotation(&mut self, other: &Matrix4) -> &mut Self {
        let e = &other.elements;

        let x = e[0] * e[0] + e[1] * e[1] + e[2] * e[2];
        let y = e[4] * e[4] + e[5] * e[5] + e[6] * e[6];
        let z = e[8] * e[8] + e[9] * e[9] + e[10] * e[10];

        let sx = if x != 0.0 { 1.0 / x.sqrt() } else { 0.0 };
        let sy = if y != 0.0 { 1.0 / y.sqrt() } else { 0.0 };
        let sz = if z != 0.0 { 1.0 / z.sqrt() } else { 0.0 };

        self.elements[0] = e[0] * sx;
        self.elements[1] = e[1] * sx;
        self.elements[2] = e[2] * sx;

        self.elements[4] = e[4] * sy;
        self.elements[5] = e[5] * sy;
        self.elements[6] = e[6] * sy;

        self.elements[8] = e[8] * sz;
        self.elements[9] = e[9] * sz;
        self.elements[10] = e[10] * sz;
        self
    }

    /// Transform a Vector3 as a point (with translation and perspective
    /// divide).
    #[inline]
    pub fn transform_point(&self, v: &Vector3) -> Vector3 {
        v.apply_matrix4(self)
    }

    /// Transform a Vector3 as a direction (without translation).
    #[inline]
    pub fn transform_direction(&self, v: &Vector3) -> Vector3 {
        let e = &self.elements;
        Vector3 {
            x: e[0] * v.x + e[4] * v.y + e[8] * v.z,
            y: e[1] * v.x + e[5] * v.y + e[9] * v.z,
            z: e[2] * v.x + e[6] * v.y + e[10] * v.z,
        }
    }

    /// Check if approximately equal to another matrix.
    pub fn approx_eq(&self, other: &Matrix4, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.elements;
        write!(
            f,
            "Matrix4[\n {}, {}, {}, {},\n {}, {}, {}, {},\n {}, {}, {}, {},\n {}, {}, {}, {}\n ]",
            e[0], e[4], e[8], e[12],
            e[1], e[5], e[9], e[13],
            e[2], e[6], e[10], e[14],
            e[3], e[7], e[11], e[15]
        )
    }
}

impl std::ops::Mul for Matrix4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<Vector3> for Matrix4 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform_point(&rhs)
    }
}

impl From<glam::Mat4> for Matrix4 {
    fn from(m: glam::Mat4) -> Self {
        Self {
            elements: m.to_cols_array(),
        }
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        glam::Mat4::from_cols_array(&m.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse() {
        let m = Matrix4::compose(
            &Vector3::new(1.0, 2.0, 3.0),
            &Vector3::new(2.0, 1.0, 0.5),
            &Quaternion::from_axis_angle(&Vector3::UNIT_Y, 0.7),
        );
        let id = m.multiply(&m.inverse());
        assert!(id.approx_eq(&Matrix4::IDENTITY, 1e-5));
    }

    #[test]
    fn test_singular_inverse_is_identity() {
        // Zero row.
        let m = Matrix4::new(
            1.0, 2.0, 3.0, 4.0,
            0.0, 0.0, 0.0, 0.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
        );
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Matrix4::IDENTITY);
    }

    #[test]
    fn test_set_from_inverse_matches_invert() {
        let m = Matrix4::from_axis_angle(&Vector3::new(0.0, 0.6, 0.8), 1.2);
        let mut a = m;
        a.invert();
        let mut b = Matrix4::identity();
        b.set_from_inverse(&m);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotate_x_matches_constructor() {
        let mut m = Matrix4::identity();
        m.rotate_x(0.8);
        assert!(m.approx_eq(&Matrix4::from_rotation_x(0.8), 1e-6));
    }

    #[test]
    fn test_translate_is_local() {
        let mut m = Matrix4::from_rotation_z(std::f32::consts::FRAC_PI_2);
        m.translate(&Vector3::UNIT_X);
        // A local +X step under a 90 degree Z rotation moves the origin along +Y.
        assert!(m.position().approx_eq(&Vector3::UNIT_Y, 1e-6));
    }

    #[test]
    fn test_extract_rotation_drops_scale() {
        let m = Matrix4::compose(
            &Vector3::ZERO,
            &Vector3::new(3.0, 4.0, 5.0),
            &Quaternion::from_axis_angle(&Vector3::UNIT_Z, 0.5),
        );
        let mut r = Matrix4::identity();
        r.extract_rotation(&m);
        assert!(r.approx_eq(&Matrix4::from_rotation_z(0.5), 1e-5));
    }
}
