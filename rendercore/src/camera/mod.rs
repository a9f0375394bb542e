//! Camera module — view and projection matrix derivation.
//!
//! Cameras are plain owned values: the caller creates them, feeds them
//! input deltas, and calls the explicit `update_*` methods once per frame
//! before reading the matrices.

mod camera;
mod camera_uniform;
mod orthographic_camera;
mod perspective_camera;

pub use camera::{Camera, CameraBase};
pub use camera_uniform::CameraUniform;
pub use orthographic_camera::{OrthographicCamera, orthographic_projection};
pub use perspective_camera::{PerspectiveCamera, perspective_projection};
