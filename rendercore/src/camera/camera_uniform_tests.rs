use glam::{Mat4, Vec3};
use crate::camera::{Camera, PerspectiveCamera};
use super::*;

#[test]
fn test_camera_uniform_layout() {
    // mat4 + vec4
    assert_eq!(std::mem::size_of::<CameraUniform>(), 20 * 4);
    assert_eq!(CameraUniform::default().as_bytes().len(), 80);
}

#[test]
fn test_default_is_identity_at_origin() {
    let uniform = CameraUniform::default();

    assert_eq!(uniform.view_projection, Mat4::IDENTITY.to_cols_array_2d());
    assert_eq!(uniform.position, [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_from_camera_captures_cached_state() {
    let mut camera = PerspectiveCamera::new(0.1, 100.0, 1.5, 60.0);
    camera.set_translation(Vec3::new(1.0, 2.0, 3.0));
    camera.update_view();

    let uniform = CameraUniform::from_camera(&camera);

    assert_eq!(uniform.view_projection, camera.view_projection_matrix().to_cols_array_2d());
    let position = Vec3::new(uniform.position[0], uniform.position[1], uniform.position[2]);
    assert!(position.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-5));
    assert_eq!(uniform.position[3], 1.0);
}

#[test]
fn test_update_and_bytes_follow_camera() {
    let mut camera = PerspectiveCamera::new(0.1, 100.0, 1.0, 45.0);
    let mut uniform = CameraUniform::default();

    uniform.update(&camera as &dyn Camera);
    let floats: &[f32] = bytemuck::cast_slice(uniform.as_bytes());
    assert_eq!(floats[0], camera.projection_matrix().x_axis.x);

    camera.move_forward(2.0);
    camera.update_view();
    uniform.update(&camera);

    assert!((uniform.position[2] - 2.0).abs() < 1e-6);
}
