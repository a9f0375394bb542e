//! Translation, rotation and scale of an object.
//!
//! The matrix is always `Scale · Translate · Rotate`: applied to a column
//! vector it rotates first, translates second and scales last.
//!
//! Rotations compose in the object's local frame. Every rotating call
//! right-multiplies the stored quaternion:
//!
//! ```text
//! new_rotation = current_rotation * delta_rotation
//! ```
//!
//! Swapping the operands turns this into a world-frame composition, which
//! is observably different after two non-commuting rotations.

use glam::{Mat3, Mat4, Quat, Vec3};
use super::clamp::{clamp_min_vec3, MIN_SCALE};

/// Position, orientation and scale of an object, with cached basis vectors.
///
/// `right`, `up` and `forward` are the columns of the rotation matrix.
/// They are refreshed by every call that changes the rotation and are left
/// untouched by translation and scale changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,

    right: Vec3,
    up: Vec3,
    forward: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform: zero translation, identity rotation, unit scale.
    pub fn new() -> Self {
        Self::from_parts(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE)
    }

    /// Build a transform from explicit parts.
    ///
    /// `scale` is clamped the same way [`Transform::set_scale`] clamps it.
    pub fn from_parts(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        debug_assert!(rotation.is_normalized(), "Transform rotation must be a unit quaternion: {:?}", rotation);

        let mut transform = Self {
            translation,
            rotation,
            scale: Vec3::ONE,
            right: Vec3::X,
            up: Vec3::Y,
            forward: Vec3::Z,
        };
        transform.set_scale(scale);
        transform.update_basis();
        transform
    }

    // ===== TRANSLATION =====

    /// Offset the translation by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.translation += delta;
    }

    /// Replace the translation.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    // ===== ROTATION =====

    /// Rotate `degrees` around the local X axis.
    pub fn rotate_x(&mut self, degrees: f32) {
        self.apply_local_rotation(Quat::from_rotation_x(degrees.to_radians()));
    }

    /// Rotate `degrees` around the local Y axis.
    pub fn rotate_y(&mut self, degrees: f32) {
        self.apply_local_rotation(Quat::from_rotation_y(degrees.to_radians()));
    }

    /// Rotate `degrees` around the local Z axis.
    pub fn rotate_z(&mut self, degrees: f32) {
        self.apply_local_rotation(Quat::from_rotation_z(degrees.to_radians()));
    }

    /// Compose a unit quaternion in the local frame.
    pub fn rotate(&mut self, quat: Quat) {
        debug_assert!(quat.is_normalized(), "Transform::rotate expects a unit quaternion: {:?}", quat);
        self.apply_local_rotation(quat);
    }

    /// Compose Euler angles in the local frame.
    ///
    /// The angles are degrees in X-Y-X order: `x` about X, then `y` about the
    /// new Y, then `z` about the new X again.
    pub fn rotate_euler(&mut self, degrees: Vec3) {
        self.apply_local_rotation(euler_degrees_to_quat(degrees));
    }

    /// Replace the rotation.
    pub fn set_rotation(&mut self, quat: Quat) {
        debug_assert!(quat.is_normalized(), "Transform::set_rotation expects a unit quaternion: {:?}", quat);
        self.rotation = quat;
        self.update_basis();
    }

    /// Replace the rotation with Euler angles (degrees, X-Y-X order as in
    /// [`Transform::rotate_euler`]).
    pub fn set_rotation_euler(&mut self, degrees: Vec3) {
        self.rotation = euler_degrees_to_quat(degrees);
        self.update_basis();
    }

    // ===== SCALE =====

    /// Multiply the scale component-wise by `delta`, then clamp.
    pub fn scale_by(&mut self, delta: Vec3) {
        self.set_scale(self.scale * delta);
    }

    /// Replace the scale, clamping every component to at least [`MIN_SCALE`].
    pub fn set_scale(&mut self, scale: Vec3) {
        let clamped = clamp_min_vec3(scale, MIN_SCALE);
        if clamped != scale {
            crate::rc_debug!("rendercore::Transform", "Scale {} clamped to {}", scale, clamped);
        }
        self.scale = clamped;
    }

    // ===== DERIVED =====

    /// `Scale · Translate · Rotate`, computed from the current state.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale(self.scale)
            * Mat4::from_translation(self.translation)
            * Mat4::from_quat(self.rotation)
    }

    /// Where the local origin ends up: the translation column of [`Transform::to_matrix`].
    pub fn world_position(&self) -> Vec3 {
        self.scale * self.translation
    }

    /// Local +Z axis in world space (third rotation column).
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Local +Y axis in world space (second rotation column).
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Local +X axis in world space (first rotation column).
    pub fn right(&self) -> Vec3 {
        self.right
    }

    // ===== STATE =====

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    // ===== INTERNAL =====

    /// `rotation = rotation * delta`, then refresh the basis.
    ///
    /// The product is re-normalized so long chains of small rotations
    /// (mouse drags) stay a unit quaternion.
    fn apply_local_rotation(&mut self, delta: Quat) {
        self.rotation = (self.rotation * delta).normalize();
        self.update_basis();
    }

    fn update_basis(&mut self) {
        let rotation = Mat3::from_quat(self.rotation);
        self.right = rotation.x_axis;
        self.up = rotation.y_axis;
        self.forward = rotation.z_axis;
    }
}

/// `Rx(x) · Ry(y) · Rx(z)`
fn euler_degrees_to_quat(degrees: Vec3) -> Quat {
    Quat::from_rotation_x(degrees.x.to_radians())
        * Quat::from_rotation_y(degrees.y.to_radians())
        * Quat::from_rotation_x(degrees.z.to_radians())
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
