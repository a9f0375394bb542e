//! Shared viewpoint state and the `Camera` trait.
//!
//! A camera stores its pose *inverted* inside a [`Transform`]: every
//! mutator negates its input before handing it to the transform, so the
//! transform's matrix already is the view matrix and no matrix inverse is
//! computed per frame.
//!
//! Both cached matrices are snapshots. Mutators never refresh them; call
//! [`Camera::update_view`] / [`Camera::update_projection`] once after a
//! batch of changes. Accessors never recompute either.

use glam::{Mat3, Mat4, Quat, Vec3};
use crate::math::{clamp_min, Transform, MIN_ASPECT_RATIO};

/// State every camera variant carries: the stored (inverted) transform,
/// clip planes, aspect ratio and the two cached matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraBase {
    transform: Transform,
    view: Mat4,
    projection: Mat4,
    near: f32,
    far: f32,
    aspect_ratio: f32,
}

impl CameraBase {
    /// Identity transform, identity view and projection.
    ///
    /// Variants compute their projection right after building the base.
    pub fn new(near: f32, far: f32, aspect_ratio: f32) -> Self {
        let mut base = Self {
            transform: Transform::new(),
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            near,
            far,
            aspect_ratio: MIN_ASPECT_RATIO,
        };
        base.set_aspect_ratio(aspect_ratio);
        base
    }

    /// Store a freshly computed projection matrix.
    pub fn set_projection(&mut self, projection: Mat4) {
        self.projection = projection;
    }

    fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        let clamped = clamp_min(aspect_ratio, MIN_ASPECT_RATIO);
        if clamped != aspect_ratio {
            crate::rc_debug!("rendercore::Camera", "Aspect ratio {} clamped to {}", aspect_ratio, clamped);
        }
        self.aspect_ratio = clamped;
    }
}

/// A viewpoint producing a view matrix and a projection matrix.
///
/// Implementors provide access to their [`CameraBase`] and the projection
/// formula; everything else is shared.
///
/// Movement and rotation take natural "move the camera this way" values.
/// The stored transform holds the inverse, so the world pose is recovered
/// from the cached view: rotation `Rᵀ` and eye position `-Rᵀ·t`, where
/// `R`/`t` are the view's rotation block and translation column.
pub trait Camera {
    /// Shared camera state.
    fn base(&self) -> &CameraBase;

    /// Shared camera state, mutable.
    fn base_mut(&mut self) -> &mut CameraBase;

    /// Recompute and store the projection matrix from the current parameters.
    fn update_projection(&mut self);

    // ===== MOVEMENT =====

    // The stored translation lives in eye space, where the camera's own
    // right/up/forward are the unit X/Y/Z axes.

    /// Move the camera by `delta` expressed in its own frame
    /// (`x` right, `y` up, `z` forward).
    fn translate(&mut self, delta: Vec3) {
        self.base_mut().transform.translate(-delta);
    }

    /// Replace the stored translation with `-translation`.
    ///
    /// With an identity orientation the eye ends up at `translation`; in
    /// general it ends up at `Rᵀ · translation`, `R` being the view rotation.
    fn set_translation(&mut self, translation: Vec3) {
        self.base_mut().transform.set_translation(-translation);
    }

    /// Move `distance` along the camera's forward axis.
    fn move_forward(&mut self, distance: f32) {
        self.translate(Vec3::Z * distance);
    }

    /// Move `distance` along the camera's right axis.
    fn move_right(&mut self, distance: f32) {
        self.translate(Vec3::X * distance);
    }

    /// Move `distance` along the camera's up axis.
    fn move_up(&mut self, distance: f32) {
        self.translate(Vec3::Y * distance);
    }

    // ===== ROTATION =====

    /// Rotate `degrees` around the X axis.
    fn rotate_x(&mut self, degrees: f32) {
        self.base_mut().transform.rotate_x(-degrees);
    }

    fn rotate_y(&mut self, degrees: f32) {
        self.base_mut().transform.rotate_y(-degrees);
    }

    fn rotate_z(&mut self, degrees: f32) {
        self.base_mut().transform.rotate_z(-degrees);
    }

    /// Apply `rotation` to the camera's world orientation.
    fn rotate(&mut self, rotation: Quat) {
        self.base_mut().transform.rotate(rotation.inverse());
    }

    /// Replace the camera's world orientation.
    fn set_rotation(&mut self, rotation: Quat) {
        self.base_mut().transform.set_rotation(rotation.inverse());
    }

    // ===== PROJECTION PARAMETERS (no automatic update) =====

    fn set_near_plane(&mut self, near: f32) {
        self.base_mut().near = near;
    }

    fn set_far_plane(&mut self, far: f32) {
        self.base_mut().far = far;
    }

    /// Set width / height, clamped to at least [`MIN_ASPECT_RATIO`].
    fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.base_mut().set_aspect_ratio(aspect_ratio);
    }

    fn near_plane(&self) -> f32 {
        self.base().near
    }

    fn far_plane(&self) -> f32 {
        self.base().far
    }

    fn aspect_ratio(&self) -> f32 {
        self.base().aspect_ratio
    }

    // ===== MATRICES =====

    /// Snapshot the stored transform as the view matrix.
    fn update_view(&mut self) {
        let base = self.base_mut();
        base.view = base.transform.to_matrix();
    }

    /// Last view matrix computed by [`Camera::update_view`].
    fn view_matrix(&self) -> &Mat4 {
        &self.base().view
    }

    /// Last projection matrix computed by [`Camera::update_projection`].
    fn projection_matrix(&self) -> &Mat4 {
        &self.base().projection
    }

    /// `projection * view` of the cached matrices.
    fn view_projection_matrix(&self) -> Mat4 {
        self.base().projection * self.base().view
    }

    // ===== WORLD POSE (from the cached view) =====

    /// Eye position in world space.
    fn position(&self) -> Vec3 {
        let view = &self.base().view;
        let rotation = Mat3::from_mat4(*view);
        -(rotation.transpose() * view.w_axis.truncate())
    }

    /// World direction of the camera's local +Z axis.
    fn forward(&self) -> Vec3 {
        Mat3::from_mat4(self.base().view).row(2)
    }

    /// World direction of the camera's local +Y axis.
    fn up(&self) -> Vec3 {
        Mat3::from_mat4(self.base().view).row(1)
    }

    /// World direction of the camera's local +X axis.
    fn right(&self) -> Vec3 {
        Mat3::from_mat4(self.base().view).row(0)
    }

    /// The stored transform. It holds the *inverse* of the camera pose.
    fn transform(&self) -> &Transform {
        &self.base().transform
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
