//! Axis-aligned bounding box.
//!
//! Typically grown point by point over a mesh's vertex positions, then used
//! to place a camera so the whole mesh is in view.

use glam::{Mat4, Vec3};
use super::intersection::{aabb_intersects_aabb, point_intersects_aabb};

/// Axis-Aligned Bounding Box
///
/// [`AABB::EMPTY`] (also the `Default`) is inverted: its min is larger than
/// its max, so the first [`AABB::expand_point`] snaps both corners to the point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Default for AABB {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl AABB {
    /// Box containing nothing, ready to be expanded.
    pub const EMPTY: AABB = AABB {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point of `points`.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        let mut aabb = Self::EMPTY;
        for point in points {
            aabb.expand_point(point);
        }
        aabb
    }

    /// `true` until something has been added to an [`AABB::EMPTY`] box.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    // ===== GROWTH =====

    /// Grow the box so it contains `point`.
    pub fn expand_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow the box so it contains `other`.
    pub fn expand_aabb(&mut self, other: &AABB) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Move both corners by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.min += delta;
        self.max += delta;
    }

    // ===== MEASURES =====

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Per-axis side lengths.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn x_length(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn y_length(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn z_length(&self) -> f32 {
        self.max.z - self.min.z
    }

    /// The 8 corners, min first and max last.
    pub fn bound_points(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            min,
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, min.z),
            max,
        ]
    }

    // ===== QUERIES =====

    /// Test if `point` lies inside or on the boundary.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point_intersects_aabb(self.min, self.max, point)
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        aabb_intersects_aabb(self.min, self.max, other.min, other.max)
    }

    /// Transform this AABB by a matrix, returning the tight box around the result.
    ///
    /// Arvo's method: each matrix axis is projected onto the box extents
    /// instead of transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
