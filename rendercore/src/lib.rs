/*!
# RenderCore

Transform and camera core for a 3D renderer.

This crate turns high-level intentions ("move the camera forward", "rotate
this object 30 degrees around Y") into the column-major 4x4 matrices a GPU
pipeline consumes. It has no window, no GPU objects and no global state
apart from the swappable logger.

## Architecture

- **Transform**: translation, rotation and scale of an object, with its local basis
- **Camera**: trait shared by every camera variant (movement, rotation, cached matrices)
- **PerspectiveCamera**: vertical field of view projection
- **OrthographicCamera**: fixed vertical extent projection
- **CameraUniform**: GPU-ready camera block
- **AABB**: axis-aligned bounding boxes and overlap tests

Matrices are only recomputed by the explicit `update_*` calls, so a batch of
input events costs one matrix rebuild per frame.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod camera;

// Main rc namespace module
pub mod rc {
    // Error types
    pub use crate::error::{Error, Result};

    // Transform and bounding volumes
    pub use crate::math::{Transform, AABB};

    // Cameras
    pub use crate::camera::{
        Camera, CameraBase, CameraUniform,
        PerspectiveCamera, OrthographicCamera,
        perspective_projection, orthographic_projection,
    };

    // Logging sub-module (types and dispatch, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, log, log_detailed,
        };
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }
}

// Re-export math library at crate root
pub use glam;
