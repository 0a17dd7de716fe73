//! Quaternion implementation for rotations.

use crate::consts::EPSILON;
use crate::{Matrix3, Matrix4, Vector3};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

/// A quaternion representing a rotation, stored as (x, y, z, w) with w the
/// scalar part.
///
/// The type does not enforce unit length. Operations that assume a unit
/// quaternion say so: [`conjugate`](Quaternion::conjugate) skips the
/// rescale that [`invert`](Quaternion::invert) performs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Quaternion {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// W component (scalar).
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation).
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new quaternion.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create from an array [x, y, z, w].
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self { x: a[0], y: a[1], z: a[2], w: a[3] }
    }

    /// Convert to an array [x, y, z, w].
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Set the components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    /// Copy from another quaternion.
    #[inline]
    pub fn copy(&mut self, q: &Quaternion) -> &mut Self {
        *self = *q;
        self
    }

    /// Set to identity.
    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Create a quaternion from a unit axis and an angle in radians.
    pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
        let half_angle = angle * 0.5;
        let s = half_angle.sin();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half_angle.cos(),
        }
    }

    /// Extract a quaternion from the nine elements of a rotation matrix
    /// (row-major argument order, no scale).
    ///
    /// Branches on the trace to pick the numerically stable path: the
    /// trace formula when it is positive, otherwise the formula anchored
    /// on the largest diagonal element. Using only the trace formula
    /// divides by a near-zero value for rotations near 180 degrees.
    #[allow(clippy::too_many_arguments)]
    pub fn from_rotation_elements(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Self {
                w: 0.25 / s,
                x: (m21 - m12) * s,
                y: (m02 - m20) * s,
                z: (m10 - m01) * s,
            }
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self {
                w: (m21 - m12) / s,
                x: 0.25 * s,
                y: (m01 + m10) / s,
                z: (m02 + m20) / s,
            }
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self {
                w: (m02 - m20) / s,
                x: (m01 + m10) / s,
                y: 0.25 * s,
                z: (m12 + m21) / s,
            }
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self {
                w: (m10 - m01) / s,
                x: (m02 + m20) / s,
                y: (m12 + m21) / s,
                z: 0.25 * s,
            }
        }
    }

    /// Extract the rotation of a 3x3 matrix. The matrix is assumed to be a
    /// pure rotation; scale is not removed.
    pub fn from_matrix3(m: &Matrix3) -> Self {
        let e = &m.elements;
        Self::from_rotation_elements(
            e[0], e[3], e[6],
            e[1], e[4], e[7],
            e[2], e[5], e[8],
        )
    }

    /// Extract the rotation of a 4x4 matrix's upper-left 3x3. The linear
    /// part is assumed to be a pure rotation; scale is not removed (use
    /// [`Matrix4::decompose`] for scaled matrices).
    pub fn from_matrix4(m: &Matrix4) -> Self {
        let e = &m.elements;
        Self::from_rotation_elements(
            e[0], e[4], e[8],
            e[1], e[5], e[9],
            e[2], e[6], e[10],
        )
    }

    /// Get the length of the quaternion.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Get the squared length.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Normalize the quaternion. Zero-length quaternions are left
    /// unchanged.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len_sq = self.length_squared();
        if len_sq > 0.0 {
            let inv_len = 1.0 / len_sq.sqrt();
            self.x *= inv_len;
            self.y *= inv_len;
            self.z *= inv_len;
            self.w *= inv_len;
        }
        self
    }

    /// Return a normalized copy.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Quaternion) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Conjugate: negated vector part. For unit quaternions this is the
    /// inverse without the rescale [`invert`](Quaternion::invert) pays for.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Invert this quaternion: conjugate rescaled by the reciprocal
    /// length, so non-unit inputs are handled. Zero-length quaternions
    /// become the identity.
    pub fn invert(&mut self) -> &mut Self {
        let d = self.length_squared();
        if d == 0.0 {
            return self.set_identity();
        }
        let inv = 1.0 / d.sqrt();

        self.x *= -inv;
        self.y *= -inv;
        self.z *= -inv;
        self.w *= inv;
        self
    }

    /// Return the inverse of this quaternion.
    pub fn inverse(&self) -> Self {
        let mut q = *self;
        q.invert();
        q
    }

    /// Set this quaternion to the inverse of another. Produces the same
    /// numbers as [`invert`](Quaternion::invert) on a copy of `other`.
    pub fn set_from_inverse(&mut self, other: &Quaternion) -> &mut Self {
        *self = *other;
        self.invert()
    }

    /// Multiply this quaternion by another (applies `other` first).
    pub fn multiply(&self, other: &Quaternion) -> Self {
        Self {
            x: self.x * other.w + self.w * other.x + self.y * other.z - self.z * other.y,
            y: self.y * other.w + self.w * other.y + self.z * other.x - self.x * other.z,
            z: self.z * other.w + self.w * other.z + self.x * other.y - self.y * other.x,
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        }
    }

    /// Pre-multiply this quaternion by another.
    pub fn premultiply(&self, other: &Quaternion) -> Self {
        other.multiply(self)
    }

    /// Divide this quaternion by another (multiplies by its negation).
    pub fn divide(&self, other: &Quaternion) -> Self {
        self.multiply(&Self {
            x: -other.x,
            y: -other.y,
            z: -other.z,
            w: -other.w,
        })
    }

    /// Multiply all components by a scalar.
    #[inline]
    pub fn multiply_scalar(&mut self, s: f32) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self.w *= s;
        self
    }

    /// Divide all components by a scalar. Dividing by zero yields the zero
    /// quaternion, not Inf.
    #[inline]
    pub fn divide_scalar(&mut self, s: f32) -> &mut Self {
        let inv = if s != 0.0 { 1.0 / s } else { 0.0 };
        self.multiply_scalar(inv)
    }

    /// Linear interpolation per component, without renormalizing; the
    /// result is generally not unit length.
    #[inline]
    pub fn lerp(&self, other: &Quaternion, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
            w: self.w + (other.w - self.w) * t,
        }
    }

    /// Linear interpolation between a and b.
    #[inline]
    pub fn lerp_between(a: &Quaternion, b: &Quaternion, t: f32) -> Self {
        a.lerp(b, t)
    }

    /// Normalized linear interpolation: lerp then renormalize. A cheap
    /// approximation to slerp without constant angular velocity.
    #[inline]
    pub fn nlerp(&self, other: &Quaternion, t: f32) -> Self {
        let mut q = self.lerp(other, t);
        q.normalize();
        q
    }

    /// Normalized linear interpolation between a and b.
    #[inline]
    pub fn nlerp_between(a: &Quaternion, b: &Quaternion, t: f32) -> Self {
        a.nlerp(b, t)
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// If the dot product is negative, `other` is negated so the rotation
    /// does not take the long way around. Nearly parallel inputs fall back
    /// to linear weights to avoid dividing by a near-zero sin.
    pub fn slerp(&self, other: &Quaternion, t: f32) -> Self {
        let (ax, ay, az, aw) = (self.x, self.y, self.z, self.w);
        let (mut bx, mut by, mut bz, mut bw) = (other.x, other.y, other.z, other.w);

        let mut cosom = ax * bx + ay * by + az * bz + aw * bw;

        if cosom < 0.0 {
            cosom = -cosom;
            bx = -bx;
            by = -by;
            bz = -bz;
            bw = -bw;
        }

        let (scale0, scale1);
        if 1.0 - cosom > EPSILON {
            let omega = cosom.acos();
            let sinom = 1.0 / omega.sin();
            scale0 = ((1.0 - t) * omega).sin() * sinom;
            scale1 = (t * omega).sin() * sinom;
        } else {
            scale0 = 1.0 - t;
            scale1 = t;
        }

        Self {
            x: scale0 * ax + scale1 * bx,
            y: scale0 * ay + scale1 * by,
            z: scale0 * az + scale1 * bz,
            w: scale0 * aw + scale1 * bw,
        }
    }

    /// Spherical linear interpolation between a and b.
    #[inline]
    pub fn slerp_between(a: &Quaternion, b: &Quaternion, t: f32) -> Self {
        a.slerp(b, t)
    }

    /// Rotate incrementally around the X axis. Applies the half-angle
    /// shortcut for multiplying by a pure X rotation.
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        let half_angle = angle * 0.5;
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let s = half_angle.sin();
        let c = half_angle.cos();

        self.x = x * c + w * s;
        self.y = y * c + z * s;
        self.z = z * c - y * s;
        self.w = w * c - x * s;
        self
    }

    /// Rotate incrementally around the Y axis. Applies the half-angle
    /// shortcut for multiplying by a pure Y rotation.
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        let half_angle = angle * 0.5;
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let s = half_angle.sin();
        let c = half_angle.cos();

        self.x = x * c - z * s;
        self.y = y * c + w * s;
        self.z = z * c + x * s;
        self.w = w * c - y * s;
        self
    }

    /// Rotate incrementally around the Z axis. Applies the half-angle
    /// shortcut for multiplying by a pure Z rotation.
    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        let half_angle = angle * 0.5;
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let s = half_angle.sin();
        let c = half_angle.cos();

        self.x = x * c + y * s;
        self.y = y * c - x * s;
        self.z = z * c + w * s;
        self.w = w * c - z * s;
        self
    }

    /// Rotate incrementally around all three axes, applying Z, then X,
    /// then Y. The order is a caller-visible contract; the three rotations
    /// do not commute.
    pub fn rotate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.rotate_z(z);
        self.rotate_x(x);
        self.rotate_y(y)
    }

    /// Rotate a vector by this quaternion.
    #[inline]
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        v.apply_quaternion(self)
    }

    /// Check if approximately equal.
    #[inline]
    pub fn approx_eq(&self, other: &Quaternion, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
            && (self.w - other.w).abs() < epsilon
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quaternion[ {}, {}, {}, {} ]", self.x, self.y, self.z, self.w)
    }
}

impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl Mul<Vector3> for Quaternion {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.rotate_vector(&rhs)
    }
}

impl Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        Self {
            x: q.x,
            y: q.y,
            z: q.z,
            w: q.w,
        }
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rotation() {
        let q = Quaternion::IDENTITY;
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert!(q.rotate_vector(&v).approx_eq(&v, 1e-6));
    }

    #[test]
    fn test_conjugate_matches_invert_for_unit() {
        let q = Quaternion::from_axis_angle(&Vector3::UNIT_Y, 0.8);
        assert!(q.conjugate().approx_eq(&q.inverse(), 1e-6));
    }

    #[test]
    fn test_invert_rescales_non_unit() {
        let mut q = Quaternion::from_axis_angle(&Vector3::UNIT_X, 0.6);
        q.multiply_scalar(3.0);
        let inv = q.inverse();
        assert!((inv.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_invert_zero_is_identity() {
        let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        q.invert();
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[test]
    fn test_rotate_order_is_z_x_y() {
        let mut a = Quaternion::IDENTITY;
        a.rotate(0.3, 0.5, 0.7);

        let mut b = Quaternion::IDENTITY;
        b.rotate_z(0.7);
        b.rotate_x(0.3);
        b.rotate_y(0.5);

        assert!(a.approx_eq(&b, 1e-6));
    }

    #[test]
    fn test_rotate_x_matches_axis_angle_multiply() {
        let mut q = Quaternion::from_axis_angle(&Vector3::UNIT_Z, 0.4);
        let expected = q.multiply(&Quaternion::from_axis_angle(&Vector3::UNIT_X, 0.9));
        q.rotate_x(0.9);
        assert!(q.approx_eq(&expected, 1e-6));
    }

    #[test]
    fn test_nlerp_is_unit() {
        let a = Quaternion::from_axis_angle(&Vector3::UNIT_X, 0.2);
        let b = Quaternion::from_axis_angle(&Vector3::UNIT_Y, 1.9);
        let q = a.nlerp(&b, 0.3);
        assert!((q.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quaternion::from_axis_angle(&Vector3::UNIT_X, 0.3);
        let b = Quaternion::from_axis_angle(&Vector3::UNIT_Y, 1.1);
        assert!(a.slerp(&b, 0.0).approx_eq(&a, 1e-6));
        assert!(a.slerp(&b, 1.0).approx_eq(&b, 1e-6));
        assert!(a.slerp(&a, 0.5).approx_eq(&a, 1e-6));
    }

    #[test]
    fn test_slerp_shortest_path() {
        // a and -a are the same rotation; the midpoint must stay at a
        // instead of collapsing through the long arc.
        let a = Quaternion::IDENTITY;
        let b = -a;
        assert!(a.slerp(&b, 0.5).approx_eq(&a, 1e-6));
    }
}
