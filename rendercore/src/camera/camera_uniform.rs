//! GPU-ready snapshot of a camera.
//!
//! The layout is std140-compatible: one column-major mat4 followed by one
//! vec4 (20 floats). Uploading it is left to the caller's buffer objects.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use super::camera::Camera;

/// Camera block for a uniform buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    /// `projection * view`, column-major
    pub view_projection: [[f32; 4]; 4],
    /// Eye position in world space, `w = 1`
    pub position: [f32; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl CameraUniform {
    /// Capture the camera's cached matrices and eye position.
    pub fn from_camera<C: Camera + ?Sized>(camera: &C) -> Self {
        Self {
            view_projection: camera.view_projection_matrix().to_cols_array_2d(),
            position: camera.position().extend(1.0).to_array(),
        }
    }

    /// Refresh in place after the camera's matrices were updated.
    pub fn update<C: Camera + ?Sized>(&mut self, camera: &C) {
        *self = Self::from_camera(camera);
    }

    /// Raw bytes, ready to be copied into a mapped buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "camera_uniform_tests.rs"]
mod tests;
