//! # vmath - Fixed-Size f32 Transform Math
//!
//! vmath is a small linear-algebra library for 2D/3D graphics and game
//! code: vectors, colors, column-major matrices, quaternions and
//! axis-aligned bounding boxes, all built on `f32`.
//!
//! ## Features
//!
//! - **Vectors**: 2/3/4-component vectors and an RGBA color type
//! - **Matrices**: 2x2, 3x2 (2D affine), 3x3 and 4x4 column-major matrices
//! - **Quaternion**: rotation quaternion with slerp/nlerp and incremental rotation
//! - **Transforms**: compose/decompose between (position, scale, rotation)
//!   triples and affine matrices, matrix inversion with a documented
//!   singular fallback, matrix <-> quaternion conversion
//! - **Boxes**: 2D/3D axis-aligned bounding boxes
//! - **Scalars**: clamping, interpolation, angle wrapping, power-of-two
//!   utilities and seeded random helpers
//!
//! ## Example
//!
//! ```
//! use vmath::prelude::*;
//!
//! let position = Vector3::new(1.0, 2.0, 3.0);
//! let scale = Vector3::ONE;
//! let rotation = Quaternion::from_axis_angle(&Vector3::UNIT_Y, 0.5);
//!
//! let m = Matrix4::compose(&position, &scale, &rotation);
//! let (p, s, r) = m.decompose();
//!
//! assert!(p.approx_eq(&position, 1e-4));
//! assert!(s.approx_eq(&scale, 1e-4));
//! assert!(r.approx_eq(&rotation, 1e-4) || r.approx_eq(&-rotation, 1e-4));
//! ```
//!
//! ## Degenerate inputs
//!
//! Every operation is total. Inverting a matrix whose determinant is
//! exactly zero yields the identity matrix; normalizing a zero-length
//! vector or quaternion is a no-op. Near-singular matrices with a tiny
//! nonzero determinant are NOT caught by the fallback and invert to
//! numerically unstable results. See the individual type docs.

#![warn(missing_docs)]

mod box2;
mod box3;
mod color;
mod matrix2;
mod matrix3;
mod matrix3x2;
mod matrix4;
mod quaternion;
pub mod scalar;
mod vector2;
mod vector3;
mod vector4;

pub use box2::Box2;
pub use box3::Box3;
pub use color::Color;
pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use matrix3x2::Matrix3x2;
pub use matrix4::Matrix4;
pub use quaternion::Quaternion;
pub use scalar::Direction;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Common math constants.
pub mod consts {
    /// Pi constant.
    pub const PI: f32 = std::f32::consts::PI;
    /// Two times Pi.
    pub const TWO_PI: f32 = PI * 2.0;
    /// Half of Pi.
    pub const HALF_PI: f32 = PI * 0.5;
    /// Degrees to radians conversion factor.
    pub const DEG2RAD: f32 = PI / 180.0;
    /// Radians to degrees conversion factor.
    pub const RAD2DEG: f32 = 180.0 / PI;
    /// Small epsilon for floating point comparisons.
    pub const EPSILON: f32 = 1e-6;
}

pub mod prelude {
    //! Convenient re-exports of commonly used types.
    pub use crate::consts::*;
    pub use crate::scalar::{self, Direction};
    pub use crate::{
        Box2, Box3, Color, Matrix2, Matrix3, Matrix3x2, Matrix4, Quaternion, Vector2, Vector3,
        Vector4,
    };
}
