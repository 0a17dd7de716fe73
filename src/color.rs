//! RGBA color implementation.

use crate::{Vector2, Vector3, Vector4};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// An RGBA color with components in the 0.0-1.0 range.
///
/// Values outside that range are allowed (e.g. HDR intermediates); use
/// [`clamp01`](Color::clamp01) to saturate before display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    /// Opaque black (0, 0, 0, 1).
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    /// Opaque white (1, 1, 1, 1).
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    /// Opaque red (1, 0, 0, 1).
    pub const RED: Self = Self { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    /// Opaque green (0, 1, 0, 1).
    pub const GREEN: Self = Self { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
    /// Opaque blue (0, 0, 1, 1).
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
    /// Fully transparent black (0, 0, 0, 0).
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Create a new color from RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from an array [r, g, b, a].
    #[inline]
    pub const fn from_array(c: [f32; 4]) -> Self {
        Self { r: c[0], g: c[1], b: c[2], a: c[3] }
    }

    /// Convert to an array [r, g, b, a].
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create an opaque color from a hex integer (0xRRGGBB).
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create from a Vector2, with b = 0 and a = 1.
    #[inline]
    pub const fn from_vec2(v: Vector2) -> Self {
        Self { r: v.x, g: v.y, b: 0.0, a: 1.0 }
    }

    /// Create from a Vector3, with a = 1.
    #[inline]
    pub const fn from_vec3(v: Vector3) -> Self {
        Self { r: v.x, g: v.y, b: v.z, a: 1.0 }
    }

    /// Create from a Vector4.
    #[inline]
    pub const fn from_vec4(v: Vector4) -> Self {
        Self { r: v.x, g: v.y, b: v.z, a: v.w }
    }

    /// Set the components of this color.
    #[inline]
    pub fn set(&mut self, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        self.r = r;
        self.g = g;
        self.b = b;
        self.a = a;
        self
    }

    /// Copy from another color.
    #[inline]
    pub fn copy(&mut self, c: &Color) -> &mut Self {
        *self = *c;
        self
    }

    /// Treating the color as a 4-vector, get its length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Treating the color as a 4-vector, get its squared length.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.r * self.r + self.g * self.g + self.b * self.b + self.a * self.a
    }

    /// Normalize the color as a 4-vector. Zero colors are left unchanged.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len > 0.0 {
            let inv = 1.0 / len;
            self.r *= inv;
            self.g *= inv;
            self.b *= inv;
            self.a *= inv;
        }
        self
    }

    /// Dot product with another color.
    #[inline]
    pub fn dot(&self, other: &Color) -> f32 {
        self.r * other.r + self.g * other.g + self.b * other.b + self.a * other.a
    }

    /// Linear interpolation to another color.
    #[inline]
    pub fn lerp(&self, other: &Color, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(&self, other: &Color) -> Self {
        Self {
            r: self.r.min(other.r),
            g: self.g.min(other.g),
            b: self.b.min(other.b),
            a: self.a.min(other.a),
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(&self, other: &Color) -> Self {
        Self {
            r: self.r.max(other.r),
            g: self.g.max(other.g),
            b: self.b.max(other.b),
            a: self.a.max(other.a),
        }
    }

    /// Clamp components between min and max colors.
    #[inline]
    pub fn clamp(&self, min: &Color, max: &Color) -> Self {
        Self {
            r: self.r.max(min.r).min(max.r),
            g: self.g.max(min.g).min(max.g),
            b: self.b.max(min.b).min(max.b),
            a: self.a.max(min.a).min(max.a),
        }
    }

    /// Clamp components to the displayable 0-1 range.
    #[inline]
    pub fn clamp01(&self) -> Self {
        self.clamp(&Self::TRANSPARENT, &Self::WHITE)
    }

    /// Component-wise multiplication (modulation).
    #[inline]
    pub fn multiply(&self, other: &Color) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
            a: self.a * other.a,
        }
    }

    /// Multiply all components by a scalar.
    #[inline]
    pub fn multiply_scalar(&mut self, s: f32) -> &mut Self {
        self.r *= s;
        self.g *= s;
        self.b *= s;
        self.a *= s;
        self
    }

    /// Divide all components by a scalar. Dividing by zero yields
    /// transparent black, not Inf.
    #[inline]
    pub fn divide_scalar(&mut self, s: f32) -> &mut Self {
        let inv = if s != 0.0 { 1.0 / s } else { 0.0 };
        self.multiply_scalar(inv)
    }

    /// Check if the color is approximately equal to another.
    #[inline]
    pub fn approx_eq(&self, other: &Color, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color[ {}, {}, {}, {} ]", self.r, self.g, self.b, self.a)
    }
}

impl Add for Color {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
            a: self.a - rhs.a,
        }
    }
}

impl SubAssign for Color {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Color {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<f32> for Color {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
            a: self.a * rhs,
        }
    }
}

impl MulAssign<f32> for Color {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.multiply_scalar(rhs);
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::from_array(c)
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xFF8000);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 0.5019608).abs() < 1e-6);
        assert!(c.b.abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_clamp01() {
        let c = Color::new(2.0, -1.0, 0.5, 1.5).clamp01();
        assert_eq!(c, Color::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_lerp() {
        let c = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert!(c.approx_eq(&Color::new(0.5, 0.5, 0.5, 1.0), 1e-6));
    }
}
