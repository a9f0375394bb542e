//! Math module — transform state, bounding volumes and mesh geometry helpers.
//!
//! Everything here is plain value computation over `glam` types: no I/O,
//! no GPU objects, no shared state.

mod aabb;
mod clamp;
mod geometry;
mod intersection;
mod transform;

pub use aabb::AABB;
pub use clamp::{
    clamp_min, clamp_min_vec3, clamp_range,
    MIN_SCALE, MIN_ASPECT_RATIO, MIN_ORTHOGRAPHIC_HEIGHT, MIN_FOVY, MAX_FOVY,
};
pub use geometry::{cotangent, voronoi_triangle_areas, compute_smooth_normals};
pub use intersection::{point_intersects_aabb, aabb_intersects_aabb};
pub use transform::Transform;
