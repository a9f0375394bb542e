use glam::Vec3;
use super::*;

// ============================================================================
// clamp_min
// ============================================================================

#[test]
fn test_clamp_min_keeps_valid_value() {
    assert_eq!(clamp_min(2.5, MIN_ASPECT_RATIO), 2.5);
    assert_eq!(clamp_min(MIN_ASPECT_RATIO, MIN_ASPECT_RATIO), MIN_ASPECT_RATIO);
}

#[test]
fn test_clamp_min_substitutes_epsilon() {
    assert_eq!(clamp_min(0.0, MIN_ASPECT_RATIO), 0.01);
    assert_eq!(clamp_min(-3.0, MIN_SCALE), 0.01);
    assert_eq!(clamp_min(f32::NEG_INFINITY, MIN_ORTHOGRAPHIC_HEIGHT), 0.01);
}

#[test]
fn test_clamp_min_nan_passes_through() {
    assert!(clamp_min(f32::NAN, MIN_SCALE).is_nan());
}

#[test]
fn test_clamp_min_vec3_per_component() {
    let clamped = clamp_min_vec3(Vec3::new(-1.0, 0.5, 0.0), MIN_SCALE);
    assert_eq!(clamped, Vec3::new(0.01, 0.5, 0.01));
}

// ============================================================================
// clamp_range
// ============================================================================

#[test]
fn test_clamp_range_fovy_bounds() {
    assert_eq!(clamp_range(0.0, MIN_FOVY, MAX_FOVY), 1.0);
    assert_eq!(clamp_range(45.0, MIN_FOVY, MAX_FOVY), 45.0);
    assert_eq!(clamp_range(270.0, MIN_FOVY, MAX_FOVY), 180.0);
}
