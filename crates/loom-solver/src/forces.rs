//! Force model and semi-implicit Euler integration.

use loom_math::Vec3;
use loom_types::constants::EPSILON;

use crate::config::SpringCoefficients;

/// Force on particle `p` from the spring joining it to neighbor `n`.
///
/// ```text
/// d   = x_n - x_p,  len = |d|,  u = d / len
/// F   = k (len - L0) u + c ((v_n - v_p) · u) u
/// ```
///
/// Coincident endpoints contribute nothing. Evaluating from the other end
/// yields the exact negation, so each endpoint computes its own share.
#[inline]
pub fn spring_force(
    p_pos: Vec3,
    p_vel: Vec3,
    n_pos: Vec3,
    n_vel: Vec3,
    rest_length: f32,
    coeffs: SpringCoefficients,
) -> Vec3 {
    let d = n_pos - p_pos;
    let len = d.length();
    if len <= EPSILON {
        return Vec3::ZERO;
    }
    let axis = d / len;
    let stretch = coeffs.stiffness * (len - rest_length);
    let closing = coeffs.damping * (n_vel - p_vel).dot(axis);
    (stretch + closing) * axis
}

/// Gravity plus the velocity-proportional damping term:
/// `gravity * mass + gravity_damping * velocity`.
#[inline]
pub fn external_force(velocity: Vec3, mass: f32, gravity: Vec3, gravity_damping: f32) -> Vec3 {
    gravity * mass + gravity_damping * velocity
}

/// One semi-implicit Euler step. Returns `(position, velocity)`.
///
/// Velocity is updated first and the new velocity moves the position.
#[inline]
pub fn integrate(position: Vec3, velocity: Vec3, force: Vec3, inv_mass: f32, dt: f32) -> (Vec3, Vec3) {
    let acceleration = force * inv_mass;
    let velocity = velocity + acceleration * dt;
    (position + velocity * dt, velocity)
}
