//! Integration tests for loom-contact.

use loom_contact::SphereCollider;
use loom_math::Vec3;
use proptest::prelude::*;

const EPS: f32 = 1e-4;

// ─── Sphere Resolution Tests ──────────────────────────────────

#[test]
fn outside_particle_unchanged() {
    let sphere = SphereCollider::new(Vec3::ZERO, 1.0);
    let p = Vec3::new(0.0, 2.0, 0.0);
    let v = Vec3::new(0.3, -1.0, 0.0);
    let out = sphere.resolve(p, v);
    assert_eq!(out.position, p);
    assert_eq!(out.velocity, v);
    assert!(!out.collided());
}

#[test]
fn penetrating_particle_projected_to_surface() {
    // Particle 0.5 from the center of a unit sphere, moving toward it.
    let sphere = SphereCollider::new(Vec3::ZERO, 1.0);
    let out = sphere.resolve(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, -1.0, 0.0));

    assert!(out.collided());
    assert!((out.penetration - 0.5).abs() < EPS);
    assert!(((out.position - sphere.center).length() - 1.0).abs() < EPS);
    assert!((out.position - Vec3::new(0.0, 1.0, 0.0)).length() < EPS);

    let normal = (out.position - sphere.center).normalize();
    assert!(out.velocity.dot(normal) >= -EPS, "velocity still points inward");
    assert!(out.velocity.length() < EPS);
}

#[test]
fn tangential_velocity_preserved() {
    let sphere = SphereCollider::new(Vec3::new(1.0, 1.0, 1.0), 2.0);
    let p = Vec3::new(1.0, 2.0, 1.0); // 1.0 above center, inside
    let v = Vec3::new(0.7, -3.0, -0.2);
    let out = sphere.resolve(p, v);

    assert!((out.velocity - Vec3::new(0.7, 0.0, -0.2)).length() < EPS);
    assert!((out.position - Vec3::new(1.0, 3.0, 1.0)).length() < EPS);
}

#[test]
fn outward_velocity_untouched() {
    let sphere = SphereCollider::new(Vec3::ZERO, 1.0);
    let v = Vec3::new(0.0, 2.0, 0.5);
    let out = sphere.resolve(Vec3::new(0.0, 0.9, 0.0), v);
    assert!(out.collided());
    assert_eq!(out.velocity, v);
}

#[test]
fn particle_at_center_uses_fallback_normal() {
    let sphere = SphereCollider::new(Vec3::new(2.0, -1.0, 0.0), 3.0);
    let out = sphere.resolve(sphere.center, Vec3::new(0.0, -1.0, 0.0));
    assert!(out.position.is_finite());
    assert!((out.position - Vec3::new(2.0, 2.0, 0.0)).length() < EPS);
    assert!(out.velocity.is_finite());
    assert!(out.velocity.y >= 0.0);
}

#[test]
fn friction_scales_tangential_velocity() {
    let sphere = SphereCollider::new(Vec3::ZERO, 1.0).with_friction(0.5);
    let out = sphere.resolve(Vec3::new(0.0, 0.5, 0.0), Vec3::new(2.0, -1.0, 0.0));
    assert!((out.velocity - Vec3::new(1.0, 0.0, 0.0)).length() < EPS);
}

#[test]
fn contains_and_touching() {
    let sphere = SphereCollider::new(Vec3::ZERO, 1.0);
    assert!(sphere.contains(Vec3::new(0.0, 0.5, 0.0)));
    assert!(!sphere.contains(Vec3::new(0.0, 1.5, 0.0)));
    assert!(sphere.is_touching(Vec3::new(0.0, 1.0, 0.0), 1e-3));
    assert!(!sphere.is_touching(Vec3::new(0.0, 1.1, 0.0), 1e-3));
}

// ─── Properties ───────────────────────────────────────────────

fn coord() -> impl Strategy<Value = f32> {
    -10.0f32..10.0
}

proptest! {
    #[test]
    fn resolved_position_never_inside(
        px in coord(), py in coord(), pz in coord(),
        vx in coord(), vy in coord(), vz in coord(),
        cx in coord(), cy in coord(), cz in coord(),
        radius in 0.1f32..8.0,
    ) {
        let sphere = SphereCollider::new(Vec3::new(cx, cy, cz), radius);
        let out = sphere.resolve(Vec3::new(px, py, pz), Vec3::new(vx, vy, vz));
        let distance = (out.position - sphere.center).length();
        prop_assert!(distance >= radius - 1e-3 * radius.max(1.0), "distance {} < radius {}", distance, radius);
    }

    #[test]
    fn resolved_velocity_not_inward(
        px in coord(), py in coord(), pz in coord(),
        vx in coord(), vy in coord(), vz in coord(),
        radius in 0.1f32..8.0,
    ) {
        let sphere = SphereCollider::new(Vec3::ZERO, radius);
        let out = sphere.resolve(Vec3::new(px, py, pz), Vec3::new(vx, vy, vz));
        if out.collided() {
            let normal = out.position.normalize();
            prop_assert!(out.velocity.dot(normal) >= -1e-3);
        }
    }
}
