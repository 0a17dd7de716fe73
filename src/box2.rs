//! 2D axis-aligned bounding box implementation.

use crate::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box2 {
    /// Minimum corner.
    pub min: Vector2,
    /// Maximum corner.
    pub max: Vector2,
}

impl Default for Box2 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Box2 {
    /// Empty box (inverted, ready to expand).
    pub const EMPTY: Self = Self {
        min: Vector2 { x: f32::INFINITY, y: f32::INFINITY },
        max: Vector2 { x: f32::NEG_INFINITY, y: f32::NEG_INFINITY },
    };

    /// Create a new box.
    #[inline]
    pub const fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// Create a box from center and size.
    pub fn from_center_size(center: Vector2, size: Vector2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Create a box enclosing an array of points.
    pub fn from_points(points: &[Vector2]) -> Self {
        let mut result = Self::EMPTY;
        for p in points {
            result.expand_by_point(p);
        }
        result
    }

    /// Set the box corners.
    #[inline]
    pub fn set(&mut self, min: Vector2, max: Vector2) -> &mut Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Copy from another box.
    #[inline]
    pub fn copy(&mut self, b: &Box2) -> &mut Self {
        *self = *b;
        self
    }

    /// Make the box empty.
    #[inline]
    pub fn make_empty(&mut self) -> &mut Self {
        *self = Self::EMPTY;
        self
    }

    /// Check if the box is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y
    }

    /// Get the center of the box.
    #[inline]
    pub fn center(&self) -> Vector2 {
        if self.is_empty() {
            Vector2::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }

    /// Get the size of the box.
    #[inline]
    pub fn size(&self) -> Vector2 {
        if self.is_empty() {
            Vector2::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Expand to include a point.
    #[inline]
    pub fn expand_by_point(&mut self, point: &Vector2) -> &mut Self {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
        self
    }

    /// Expand by a vector amount per axis.
    #[inline]
    pub fn expand_by_vector(&mut self, v: &Vector2) -> &mut Self {
        self.min = self.min - *v;
        self.max = self.max + *v;
        self
    }

    /// Expand by a scalar amount in all directions.
    #[inline]
    pub fn expand_by_scalar(&mut self, scalar: f32) -> &mut Self {
        self.min = self.min.sub_scalar(scalar);
        self.max = self.max.add_scalar(scalar);
        self
    }

    /// Grow this box to enclose another.
    #[inline]
    pub fn union(&mut self, other: &Box2) -> &mut Self {
        self.min = self.min.min(&other.min);
        self.max = self.max.max(&other.max);
        self
    }

    /// Get the overlap of this box with another. Non-overlapping boxes
    /// yield an empty (inverted) result.
    pub fn intersection(&self, other: &Box2) -> Self {
        Self {
            min: self.min.max(&other.min),
            max: self.max.min(&other.max),
        }
    }

    /// Check if a point is inside the box (boundary inclusive).
    #[inline]
    pub fn contains_point(&self, point: &Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if this box intersects another.
    #[inline]
    pub fn intersects(&self, other: &Box2) -> bool {
        other.max.x >= self.min.x
            && other.min.x <= self.max.x
            && other.max.y >= self.min.y
            && other.min.y <= self.max.y
    }

    /// Check if approximately equal.
    #[inline]
    pub fn approx_eq(&self, other: &Box2, epsilon: f32) -> bool {
        self.min.approx_eq(&other.min, epsilon) && self.max.approx_eq(&other.max, epsilon)
    }
}

impl fmt::Display for Box2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Box2[ min: {}, max: {} ]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand() {
        let mut b = Box2::EMPTY;
        b.expand_by_point(&Vector2::ZERO);
        b.expand_by_point(&Vector2::ONE);
        assert!(b.min.approx_eq(&Vector2::ZERO, 1e-6));
        assert!(b.max.approx_eq(&Vector2::ONE, 1e-6));
    }

    #[test]
    fn test_contains() {
        let b = Box2::new(Vector2::ZERO, Vector2::ONE);
        assert!(b.contains_point(&Vector2::splat(0.5)));
        assert!(b.contains_point(&Vector2::ONE));
        assert!(!b.contains_point(&Vector2::splat(2.0)));
    }

    #[test]
    fn test_intersects() {
        let a = Box2::new(Vector2::ZERO, Vector2::ONE);
        let b = Box2::new(Vector2::splat(0.5), Vector2::splat(1.5));
        let c = Box2::new(Vector2::splat(2.0), Vector2::splat(3.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_union() {
        let mut a = Box2::new(Vector2::ZERO, Vector2::ONE);
        let b = Box2::new(Vector2::splat(-1.0), Vector2::splat(0.5));
        a.union(&b);
        assert!(a.min.approx_eq(&Vector2::splat(-1.0), 1e-6));
        assert!(a.max.approx_eq(&Vector2::ONE, 1e-6));
    }
}
