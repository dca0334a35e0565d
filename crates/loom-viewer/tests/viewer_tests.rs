//! Integration tests for loom-viewer controls.

use loom_compute::SerialBackend;
use loom_math::Vec3;
use loom_solver::{ClothConfig, ClothSolver};
use loom_viewer::controls::nudge_sphere;
use loom_viewer::{KeyState, ViewerControls};

// ─── Key Mapping Tests ────────────────────────────────────────

#[test]
fn held_keys_map_to_axes() {
    let keys = KeyState {
        right: true,
        up: true,
        forward: true,
        ..Default::default()
    };
    assert_eq!(keys.direction(), Vec3::new(1.0, 1.0, -1.0));

    let opposed = KeyState {
        left: true,
        right: true,
        ..Default::default()
    };
    assert_eq!(opposed.direction(), Vec3::ZERO);
}

#[test]
fn pause_and_light_toggle() {
    let mut controls = ViewerControls::default();
    let press = KeyState {
        pause: true,
        light: true,
        ..Default::default()
    };
    controls.apply(&press, 0.016);
    assert!(controls.paused);
    assert!(!controls.light_on);
    controls.apply(&press, 0.016);
    assert!(!controls.paused);
    assert!(controls.light_on);
}

#[test]
fn sphere_motion_scales_with_frame_time() {
    let mut controls = ViewerControls::default();
    let keys = KeyState {
        back: true,
        ..Default::default()
    };
    let outcome = controls.apply(&keys, 0.5);
    assert_eq!(outcome.sphere_delta, Vec3::new(0.0, 0.0, 10.0));
    assert!(!outcome.reset && !outcome.quit);
}

// ─── Solver Binding Tests ─────────────────────────────────────

#[test]
fn nudge_moves_solver_sphere() {
    let config = ClothConfig::flat(3, 3, 1.0).with_sphere([0.0, -5.0, 0.0], 1.0);
    let mut solver = ClothSolver::with_backend(config, SerialBackend).unwrap();
    let center = nudge_sphere(&mut solver, Vec3::new(1.0, 0.0, 0.0)).unwrap();
    assert_eq!(center, Some(Vec3::new(1.0, -5.0, 0.0)));
    assert_eq!(solver.sphere().unwrap().center, [1.0, -5.0, 0.0]);
}

#[test]
fn nudge_without_sphere_is_noop() {
    let mut solver =
        ClothSolver::with_backend(ClothConfig::flat(3, 3, 1.0), SerialBackend).unwrap();
    assert_eq!(nudge_sphere(&mut solver, Vec3::X).unwrap(), None);
    assert!(solver.sphere().is_none());
}
