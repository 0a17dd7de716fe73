//! 3D axis-aligned bounding box implementation.

use crate::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box3 {
    /// Minimum corner.
    pub min: Vector3,
    /// Maximum corner.
    pub max: Vector3,
}

impl Default for Box3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Box3 {
    /// Empty box (inverted, ready to expand).
    pub const EMPTY: Self = Self {
        min: Vector3 { x: f32::INFINITY, y: f32::INFINITY, z: f32::INFINITY },
        max: Vector3 { x: f32::NEG_INFINITY, y: f32::NEG_INFINITY, z: f32::NEG_INFINITY },
    };

    /// Create a new box.
    #[inline]
    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// Create a box from center and size.
    pub fn from_center_size(center: Vector3, size: Vector3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Create a box enclosing an array of points.
    pub fn from_points(points: &[Vector3]) -> Self {
        let mut result = Self::EMPTY;
        for p in points {
            result.expand_by_point(p);
        }
        result
    }

    /// Set the box corners.
    #[inline]
    pub fn set(&mut self, min: Vector3, max: Vector3) -> &mut Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Copy from another box.
    #[inline]
    pub fn copy(&mut self, b: &Box3) -> &mut Self {
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
        self.max.x < self.min.x || self.max.y < self.min.y || self.max.z < self.min.z
    }

    /// Get the center of the box.
    #[inline]
    pub fn center(&self) -> Vector3 {
        if self.is_empty() {
            Vector3::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }

    /// Get the size of the box.
    #[inline]
    pub fn size(&self) -> Vector3 {
        if self.is_empty() {
            Vector3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Expand to include a point.
    #[inline]
    pub fn expand_by_point(&mut self, point: &Vector3) -> &mut Self {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
        self
    }

    /// Expand by a vector amount per axis.
    #[inline]
    pub fn expand_by_vector(&mut self, v: &Vector3) -> &mut Self {
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
    pub fn union(&mut self, other: &Box3) -> &mut Self {
        self.min = self.min.min(&other.min);
        self.max = self.max.max(&other.max);
        self
    }

    /// Get the overlap of this box with another. Non-overlapping boxes
    /// yield an empty (inverted) result.
    pub fn intersection(&self, other: &Box3) -> Self {
        Self {
            min: self.min.max(&other.min),
            max: self.max.min(&other.max),
        }
    }

    /// Check if a point is inside the box (boundary inclusive).
    #[inline]
    pub fn contains_point(&self, point: &Vector3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Check if this box intersects another.
    #[inline]
    pub fn intersects(&self, other: &Box3) -> bool {
        other.max.x >= self.min.x
            && other.min.x <= self.max.x
            && other.max.y >= self.min.y
            && other.min.y <= self.max.y
            && other.max.z >= self.min.z
            && other.min.z <= self.max.z
    }

    /// Get the 8 corners of the box.
    pub fn corners(&self) -> [Vector3; 8] {
        [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Apply a Matrix4 transformation.
    /// Returns the AABB of the transformed box, not an OBB.
    pub fn apply_matrix4(&self, m: &Matrix4) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }

        let mut result = Self::EMPTY;
        for corner in &self.corners() {
            result.expand_by_point(&m.transform_point(corner));
        }
        result
    }

    /// Check if approximately equal.
    #[inline]
    pub fn approx_eq(&self, other: &Box3, epsilon: f32) -> bool {
        self.min.approx_eq(&other.min, epsilon) && self.max.approx_eq(&other.max, epsilon)
    }
}

impl fmt::Display for Box3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Box3[ min: {}, max: {} ]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_size() {
        let b = Box3::from_center_size(Vector3::ZERO, Vector3::ONE);
        assert!(b.center().approx_eq(&Vector3::ZERO, 1e-6));
        assert!(b.size().approx_eq(&Vector3::ONE, 1e-6));
    }

    #[test]
    fn test_from_points() {
        let b = Box3::from_points(&[
            Vector3::new(1.0, -2.0, 0.0),
            Vector3::new(-1.0, 3.0, 2.0),
        ]);
        assert!(b.min.approx_eq(&Vector3::new(-1.0, -2.0, 0.0), 1e-6));
        assert!(b.max.approx_eq(&Vector3::new(1.0, 3.0, 2.0), 1e-6));
    }

    #[test]
    fn test_transform_translates_bounds() {
        let b = Box3::new(Vector3::ZERO, Vector3::ONE);
        let m = Matrix4::from_translation(&Vector3::new(2.0, 0.0, 0.0));
        let t = b.apply_matrix4(&m);
        assert!(t.min.approx_eq(&Vector3::new(2.0, 0.0, 0.0), 1e-6));
        assert!(t.max.approx_eq(&Vector3::new(3.0, 1.0, 1.0), 1e-6));
    }

    #[test]
    fn test_empty_stays_empty_under_transform() {
        let b = Box3::EMPTY;
        let m = Matrix4::from_translation(&Vector3::ONE);
        assert!(b.apply_matrix4(&m).is_empty());
    }
}
