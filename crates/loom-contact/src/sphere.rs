//! Analytical sphere collision.
//!
//! A particle found inside the sphere is projected to the surface along
//! the center-to-particle direction and loses its inward normal velocity.

use loom_math::{normalize_or, project_onto, Vec3};
use loom_types::constants::EPSILON;

use crate::response::ContactOutcome;

/// Outward normal used for a particle exactly at the center.
const CENTER_FALLBACK_NORMAL: Vec3 = Vec3::Y;

/// A rigid sphere collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereCollider {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
    /// Kinetic friction in `[0, 1]`. Tangential velocity of a colliding
    /// particle is scaled by `1 - friction`; `0` leaves it untouched.
    pub friction: f32,
}

impl SphereCollider {
    /// Creates a frictionless sphere collider.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            friction: 0.0,
        }
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Returns true if `position` lies strictly inside the sphere.
    #[inline]
    pub fn contains(&self, position: Vec3) -> bool {
        (position - self.center).length_squared() < self.radius * self.radius
    }

    /// Returns true if `position` is within `tolerance` of the surface.
    #[inline]
    pub fn is_touching(&self, position: Vec3, tolerance: f32) -> bool {
        ((position - self.center).length() - self.radius).abs() <= tolerance
    }

    /// Resolves a candidate particle state against the sphere.
    ///
    /// Penetrating particles are moved to `center + n * radius`; if their
    /// velocity points into the sphere (`v · n < 0`) the normal component
    /// is removed. Particles outside the sphere are returned unchanged.
    pub fn resolve(&self, position: Vec3, velocity: Vec3) -> ContactOutcome {
        let offset = position - self.center;
        let (normal, distance) = normalize_or(offset, EPSILON, CENTER_FALLBACK_NORMAL);

        if distance >= self.radius {
            return ContactOutcome {
                position,
                velocity,
                penetration: 0.0,
            };
        }

        let mut velocity = velocity;
        if velocity.dot(normal) < 0.0 {
            let normal_part = project_onto(velocity, normal);
            let tangent = velocity - normal_part;
            velocity = tangent * (1.0 - self.friction);
        }

        ContactOutcome {
            position: self.center + normal * self.radius,
            velocity,
            penetration: self.radius - distance,
        }
    }
}
