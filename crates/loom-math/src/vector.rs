//! Vector helpers with explicit degenerate-case handling.

use glam::Vec3;

/// Normalizes `v`, or returns `fallback` when `|v|` is at or below `epsilon`.
///
/// Returns the unit vector together with the original length so callers
/// that need both avoid a second square root.
#[inline]
pub fn normalize_or(v: Vec3, epsilon: f32, fallback: Vec3) -> (Vec3, f32) {
    let len = v.length();
    if len <= epsilon {
        (fallback, len)
    } else {
        (v / len, len)
    }
}

/// Component of `v` along the unit vector `axis`: `(v · axis) * axis`.
#[inline]
pub fn project_onto(v: Vec3, axis: Vec3) -> Vec3 {
    v.dot(axis) * axis
}
