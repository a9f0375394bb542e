use glam::{Mat4, Quat, Vec3};
use super::*;

fn unit_box() -> AABB {
    AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0))
}

// ============================================================================
// Construction / growth
// ============================================================================

#[test]
fn test_empty_box_snaps_to_first_point() {
    let mut aabb = AABB::default();
    assert!(aabb.is_empty());

    aabb.expand_point(Vec3::new(2.0, -3.0, 4.0));

    assert!(!aabb.is_empty());
    assert_eq!(aabb.min, Vec3::new(2.0, -3.0, 4.0));
    assert_eq!(aabb.max, Vec3::new(2.0, -3.0, 4.0));
}

#[test]
fn test_from_points() {
    let aabb = AABB::from_points([
        Vec3::new(100.0, 0.0, 0.0),
        Vec3::new(0.0, 100.0, 0.0),
        Vec3::new(-5.0, 2.0, 7.0),
    ]);

    assert_eq!(aabb.min, Vec3::new(-5.0, 0.0, 0.0));
    assert_eq!(aabb.max, Vec3::new(100.0, 100.0, 7.0));
}

#[test]
fn test_expand_aabb_and_translate() {
    let mut aabb = unit_box();
    aabb.expand_aabb(&AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 0.5, 0.5)));
    assert_eq!(aabb.max, Vec3::new(3.0, 1.0, 1.0));

    aabb.translate(Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(aabb.min, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(aabb.max, Vec3::new(4.0, 2.0, 2.0));
}

// ============================================================================
// Measures
// ============================================================================

#[test]
fn test_center_and_lengths() {
    let aabb = AABB::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 6.0, 3.0));

    assert_eq!(aabb.center(), Vec3::new(1.0, 3.0, 2.5));
    assert_eq!(aabb.x_length(), 4.0);
    assert_eq!(aabb.y_length(), 6.0);
    assert_eq!(aabb.z_length(), 1.0);
    assert_eq!(aabb.extent(), Vec3::new(4.0, 6.0, 1.0));
}

#[test]
fn test_bound_points_are_the_eight_corners() {
    let aabb = unit_box();
    let corners = aabb.bound_points();

    assert_eq!(corners[0], aabb.min);
    assert_eq!(corners[7], aabb.max);
    for (i, a) in corners.iter().enumerate() {
        assert!(aabb.contains_point(*a));
        for b in corners.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_contains_point_is_inclusive() {
    let aabb = unit_box();

    assert!(aabb.contains_point(Vec3::ZERO));
    assert!(aabb.contains_point(Vec3::new(1.0, -1.0, 1.0)));
    assert!(!aabb.contains_point(Vec3::new(0.0, 0.0, 1.5)));
    assert!(!aabb.contains_point(Vec3::new(0.0, 0.0, -1.5)));
}

#[test]
fn test_contains_and_intersects() {
    let outer = AABB::new(Vec3::splat(-10.0), Vec3::splat(10.0));
    let inner = unit_box();
    let touching = AABB::new(Vec3::new(1.0, -1.0, -1.0), Vec3::new(2.0, 1.0, 1.0));
    let far = AABB::new(Vec3::splat(20.0), Vec3::splat(30.0));

    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
    assert!(inner.intersects(&touching));
    assert!(!inner.intersects(&far));
}

#[test]
fn test_transformed_matches_corner_transform() {
    let aabb = AABB::new(Vec3::new(-1.0, -2.0, -0.5), Vec3::new(2.0, 1.0, 0.5));
    let matrix = Mat4::from_scale_rotation_translation(
        Vec3::new(2.0, 1.0, 1.0),
        Quat::from_rotation_y(0.7),
        Vec3::new(5.0, 0.0, -3.0),
    );

    let expected = AABB::from_points(aabb.bound_points().map(|p| matrix.transform_point3(p)));
    let result = aabb.transformed(&matrix);

    assert!(result.min.abs_diff_eq(expected.min, 1e-4));
    assert!(result.max.abs_diff_eq(expected.max, 1e-4));
}
