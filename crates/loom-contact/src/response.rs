//! Contact results.

use loom_math::Vec3;

/// Result of resolving one particle against a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactOutcome {
    /// Committed position (on or outside the surface).
    pub position: Vec3,
    /// Committed velocity (no inward normal component on contact).
    pub velocity: Vec3,
    /// Penetration depth before correction; `0.0` when not penetrating.
    pub penetration: f32,
}

impl ContactOutcome {
    /// Returns true if the candidate position was inside the collider.
    #[inline]
    pub fn collided(&self) -> bool {
        self.penetration > 0.0
    }
}

/// Per-step summary of collider contact.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactReport {
    /// Unpinned particles resting on the collider surface after the step.
    pub contact_count: u32,
}
