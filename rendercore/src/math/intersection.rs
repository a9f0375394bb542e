//! Overlap tests on raw min/max corners.
//!
//! All comparisons are inclusive: a point on a face, or two boxes sharing a
//! face, count as intersecting.

use glam::Vec3;

/// Test if `point` lies inside the box `[bb_min, bb_max]`.
pub fn point_intersects_aabb(bb_min: Vec3, bb_max: Vec3, point: Vec3) -> bool {
    bb_min.x <= point.x && bb_max.x >= point.x
    && bb_min.y <= point.y && bb_max.y >= point.y
    && bb_min.z <= point.z && bb_max.z >= point.z
}

/// Test if two boxes overlap.
pub fn aabb_intersects_aabb(min_a: Vec3, max_a: Vec3, min_b: Vec3, max_b: Vec3) -> bool {
    // Separated on any axis means disjoint
    !(min_a.x > max_b.x || min_b.x > max_a.x
        || min_a.y > max_b.y || min_b.y > max_a.y
        || min_a.z > max_b.z || min_b.z > max_a.z)
}

#[cfg(test)]
#[path = "intersection_tests.rs"]
mod tests;
