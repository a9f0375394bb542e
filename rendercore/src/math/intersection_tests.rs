use glam::Vec3;
use super::*;

// ============================================================================
// point_intersects_aabb
// ============================================================================

#[test]
fn test_point_inside_and_on_faces() {
    let (min, max) = (Vec3::ZERO, Vec3::splat(2.0));

    assert!(point_intersects_aabb(min, max, Vec3::splat(1.0)));
    assert!(point_intersects_aabb(min, max, Vec3::new(0.0, 2.0, 1.0)));
}

#[test]
fn test_point_outside_each_axis() {
    let (min, max) = (Vec3::ZERO, Vec3::splat(2.0));

    assert!(!point_intersects_aabb(min, max, Vec3::new(3.0, 1.0, 1.0)));
    assert!(!point_intersects_aabb(min, max, Vec3::new(1.0, -0.1, 1.0)));
    // Beyond max on z must be rejected too
    assert!(!point_intersects_aabb(min, max, Vec3::new(1.0, 1.0, 5.0)));
}

// ============================================================================
// aabb_intersects_aabb
// ============================================================================

#[test]
fn test_overlapping_boxes() {
    assert!(aabb_intersects_aabb(
        Vec3::ZERO, Vec3::splat(2.0),
        Vec3::splat(1.0), Vec3::splat(3.0),
    ));
}

#[test]
fn test_boxes_sharing_a_face_intersect() {
    assert!(aabb_intersects_aabb(
        Vec3::ZERO, Vec3::splat(1.0),
        Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0),
    ));
}

#[test]
fn test_boxes_separated_on_one_axis() {
    assert!(!aabb_intersects_aabb(
        Vec3::ZERO, Vec3::splat(1.0),
        Vec3::new(0.0, 0.0, 1.5), Vec3::new(1.0, 1.0, 2.0),
    ));
}
