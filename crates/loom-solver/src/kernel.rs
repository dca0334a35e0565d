//! Per-particle step kernel.
//!
//! [`step_particle`] is a pure function of the input buffer and read-only
//! configuration. It is dispatched once per particle with no ordering
//! guarantee, and each invocation produces only its own particle.

use loom_contact::SphereCollider;
use loom_math::Vec3;
use loom_mesh::SpringTopology;

use crate::config::{ClothConfig, SpringConfig};
use crate::forces::{external_force, integrate, spring_force};
use crate::state::Particle;

/// Read-only per-step parameters, resolved from [`ClothConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    pub springs: SpringConfig,
    pub gravity: Vec3,
    pub gravity_damping: f32,
    pub mass: f32,
    pub dt: f32,
    pub sphere: Option<SphereCollider>,
}

impl StepParams {
    pub fn from_config(config: &ClothConfig) -> Self {
        Self {
            springs: config.springs,
            gravity: config.gravity_vec(),
            gravity_damping: config.gravity_damping,
            mass: config.particle_mass,
            dt: config.dt,
            sphere: config.sphere.as_ref().map(|s| s.collider()),
        }
    }
}

/// Computes the next state of particle `p` from `source`.
///
/// Pinned particles are committed unchanged with zero velocity; they are
/// neither accelerated nor moved by the collider.
pub fn step_particle(
    p: usize,
    source: &[Particle],
    topology: &SpringTopology,
    params: &StepParams,
) -> Particle {
    let me = source[p];
    if me.is_pinned() {
        return Particle {
            velocity: Vec3::ZERO,
            ..me
        };
    }

    let mut force = Vec3::ZERO;
    for neighbor in topology.neighbors(p) {
        let other = &source[neighbor.particle.index()];
        force += spring_force(
            me.position,
            me.velocity,
            other.position,
            other.velocity,
            neighbor.rest_length,
            params.springs.coefficients(neighbor.kind),
        );
    }
    force += external_force(me.velocity, params.mass, params.gravity, params.gravity_damping);

    let (mut position, mut velocity) =
        integrate(me.position, me.velocity, force, me.inv_mass, params.dt);

    if let Some(sphere) = &params.sphere {
        let contact = sphere.resolve(position, velocity);
        position = contact.position;
        velocity = contact.velocity;
    }

    Particle {
        position,
        velocity,
        ..me
    }
}
