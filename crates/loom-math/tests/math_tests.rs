//! Integration tests for loom-math.

use loom_math::{normalize_or, project_onto, Vec3};

#[test]
fn normalize_regular_vector() {
    let (n, len) = normalize_or(Vec3::new(3.0, 0.0, 4.0), 1e-7, Vec3::Y);
    assert!((len - 5.0).abs() < 1e-6);
    assert!((n - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
}

#[test]
fn normalize_zero_uses_fallback() {
    let (n, len) = normalize_or(Vec3::ZERO, 1e-7, Vec3::Y);
    assert_eq!(n, Vec3::Y);
    assert_eq!(len, 0.0);
}

#[test]
fn projection_keeps_axis_component() {
    let p = project_onto(Vec3::new(1.0, 2.0, 3.0), Vec3::Y);
    assert_eq!(p, Vec3::new(0.0, 2.0, 0.0));
}
