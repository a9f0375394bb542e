//! Setter-boundary clamping.
//!
//! Out-of-range parameters are never rejected: they are replaced by the
//! nearest valid value. Every setter goes through these functions.

use glam::Vec3;

/// Smallest allowed component of a Transform scale
pub const MIN_SCALE: f32 = 0.01;
/// Smallest allowed camera aspect ratio (width / height)
pub const MIN_ASPECT_RATIO: f32 = 0.01;
/// Smallest allowed vertical extent of an orthographic camera
pub const MIN_ORTHOGRAPHIC_HEIGHT: f32 = 0.01;
/// Smallest allowed vertical field of view, in degrees
pub const MIN_FOVY: f32 = 1.0;
/// Largest allowed vertical field of view, in degrees
pub const MAX_FOVY: f32 = 180.0;

/// Clamp `value` to be at least `epsilon`.
///
/// NaN passes through unchanged.
pub fn clamp_min(value: f32, epsilon: f32) -> f32 {
    if value < epsilon { epsilon } else { value }
}

/// Component-wise [`clamp_min`].
pub fn clamp_min_vec3(value: Vec3, epsilon: f32) -> Vec3 {
    Vec3::new(
        clamp_min(value.x, epsilon),
        clamp_min(value.y, epsilon),
        clamp_min(value.z, epsilon),
    )
}

/// Clamp `value` into `[min, max]`.
pub fn clamp_range(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "clamp_range: min ({}) > max ({})", min, max);
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
#[path = "clamp_tests.rs"]
mod tests;
