//! Orthographic camera: parallel projection of a fixed vertical extent.

use glam::{Mat4, Vec4};
use crate::math::{clamp_min, MIN_ORTHOGRAPHIC_HEIGHT};
use super::camera::{Camera, CameraBase};

/// Orthographic projection matrix (OpenGL clip space, column-major).
///
/// The visible width is `height * aspect_ratio`, centered on the view axis.
pub fn orthographic_projection(height: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    let width = height * aspect_ratio;
    let depth = far - near;

    Mat4::from_cols(
        Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / height, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -2.0 / depth, 0.0),
        Vec4::new(0.0, 0.0, -(near + far) / depth, 1.0),
    )
}

/// Camera with an orthographic (parallel) projection.
///
/// `height` is the world-space vertical extent the camera captures,
/// clamped to at least [`MIN_ORTHOGRAPHIC_HEIGHT`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    base: CameraBase,
    height: f32,
}

impl OrthographicCamera {
    /// Create a camera at the origin with its projection already computed.
    pub fn new(near: f32, far: f32, aspect_ratio: f32, height: f32) -> Self {
        let mut camera = Self {
            base: CameraBase::new(near, far, aspect_ratio),
            height: MIN_ORTHOGRAPHIC_HEIGHT,
        };
        camera.set_height(height);
        camera.update_projection();

        crate::rc_trace!(
            "rendercore::OrthographicCamera",
            "Created (near {}, far {}, aspect {}, height {})",
            near, far, camera.aspect_ratio(), camera.height
        );

        camera
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Set the vertical extent in world units (no projection update).
    pub fn set_height(&mut self, height: f32) {
        let clamped = clamp_min(height, MIN_ORTHOGRAPHIC_HEIGHT);
        if clamped != height {
            crate::rc_debug!("rendercore::OrthographicCamera", "Height {} clamped to {}", height, clamped);
        }
        self.height = clamped;
    }
}

impl Camera for OrthographicCamera {
    fn base(&self) -> &CameraBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CameraBase {
        &mut self.base
    }

    fn update_projection(&mut self) {
        debug_assert!(self.near_plane() < self.far_plane(), "near ({}) must be < far ({})", self.near_plane(), self.far_plane());

        let projection = orthographic_projection(self.height, self.aspect_ratio(), self.near_plane(), self.far_plane());
        self.base.set_projection(projection);
    }
}

#[cfg(test)]
#[path = "orthographic_camera_tests.rs"]
mod tests;
