//! Perspective camera: vertical field of view projection.

use glam::{Mat4, Vec4};
use crate::math::{clamp_range, MIN_FOVY, MAX_FOVY};
use super::camera::{Camera, CameraBase};

/// Perspective projection matrix (OpenGL clip space, column-major).
///
/// `f = 1 / tan(fovy)` uses the *full* vertical angle, and the Y scale is
/// `f * aspect_ratio`:
///
/// ```text
/// | f   0           0                       0                     |
/// | 0   f*aspect    0                       0                     |
/// | 0   0           -(far+near)/(far-near)  -2*far*near/(far-near) |
/// | 0   0           -1                      0                     |
/// ```
pub fn perspective_projection(fovy_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / fovy_degrees.to_radians().tan();
    let depth = far - near;

    Mat4::from_cols(
        Vec4::new(f, 0.0, 0.0, 0.0),
        Vec4::new(0.0, f * aspect_ratio, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -(far + near) / depth, -1.0),
        Vec4::new(0.0, 0.0, -2.0 * far * near / depth, 0.0),
    )
}

/// Camera with a perspective projection.
///
/// `fovy` is the vertical field of view in degrees, clamped to
/// `[MIN_FOVY, MAX_FOVY]`. Changing it does not touch the projection
/// matrix until [`Camera::update_projection`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    base: CameraBase,
    fovy: f32,
}

impl PerspectiveCamera {
    /// Create a camera at the origin with its projection already computed.
    ///
    /// # Arguments
    ///
    /// * `near` - Distance from the eye to the near plane, world units
    /// * `far` - Distance from the eye to the far plane, world units
    /// * `aspect_ratio` - Image width / height
    /// * `fovy` - Vertical field of view, degrees
    pub fn new(near: f32, far: f32, aspect_ratio: f32, fovy: f32) -> Self {
        let mut camera = Self {
            base: CameraBase::new(near, far, aspect_ratio),
            fovy: MIN_FOVY,
        };
        camera.set_fovy(fovy);
        camera.update_projection();

        crate::rc_trace!(
            "rendercore::PerspectiveCamera",
            "Created (near {}, far {}, aspect {}, fovy {})",
            near, far, camera.aspect_ratio(), camera.fovy
        );

        camera
    }

    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Set the vertical field of view in degrees (no projection update).
    pub fn set_fovy(&mut self, fovy: f32) {
        let clamped = clamp_range(fovy, MIN_FOVY, MAX_FOVY);
        if clamped != fovy {
            crate::rc_debug!("rendercore::PerspectiveCamera", "Fovy {} clamped to {}", fovy, clamped);
        }
        self.fovy = clamped;
    }
}

impl Camera for PerspectiveCamera {
    fn base(&self) -> &CameraBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CameraBase {
        &mut self.base
    }

    fn update_projection(&mut self) {
        debug_assert!(self.near_plane() < self.far_plane(), "near ({}) must be < far ({})", self.near_plane(), self.far_plane());
        debug_assert!(self.aspect_ratio() != 0.0, "aspect ratio must be non-zero");

        let projection = perspective_projection(self.fovy, self.aspect_ratio(), self.near_plane(), self.far_plane());
        self.base.set_projection(projection);
    }
}

#[cfg(test)]
#[path = "perspective_camera_tests.rs"]
mod tests;
