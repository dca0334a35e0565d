//! Keyboard controls, independent of the windowing backend.
//!
//! | Key           | Action                        |
//! |---------------|-------------------------------|
//! | Arrow keys    | Move sphere in the XZ plane   |
//! | W / S         | Move sphere up / down         |
//! | R             | Reset cloth to rest pose      |
//! | Space         | Pause / resume                |
//! | L             | Toggle key light              |
//! | Q / Escape    | Quit                          |

use loom_compute::ComputeBackend;
use loom_math::Vec3;
use loom_solver::ClothSolver;
use loom_types::LoomResult;

/// Keyboard snapshot for one frame.
///
/// Movement fields are "held"; the rest are "just pressed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub back: bool,
    pub up: bool,
    pub down: bool,
    pub reset: bool,
    pub pause: bool,
    pub light: bool,
    pub quit: bool,
}

impl KeyState {
    /// Unit-axis direction of the held movement keys (not normalized).
    pub fn direction(&self) -> Vec3 {
        let axis = |pos: bool, neg: bool| (pos as i32 - neg as i32) as f32;
        Vec3::new(
            axis(self.right, self.left),
            axis(self.up, self.down),
            axis(self.back, self.forward),
        )
    }
}

/// What the frame loop should do after input was applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlOutcome {
    /// World-space sphere translation for this frame.
    pub sphere_delta: Vec3,
    pub reset: bool,
    pub quit: bool,
}

/// Viewer state mutated by input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerControls {
    pub paused: bool,
    pub light_on: bool,
    /// Sphere speed in world units per second.
    pub sphere_speed: f32,
}

impl Default for ViewerControls {
    fn default() -> Self {
        Self {
            paused: false,
            light_on: true,
            sphere_speed: 20.0,
        }
    }
}

impl ViewerControls {
    /// Applies one frame of input. `frame_seconds` scales sphere motion so
    /// it is independent of frame rate; the simulation step is not.
    pub fn apply(&mut self, keys: &KeyState, frame_seconds: f32) -> ControlOutcome {
        if keys.pause {
            self.paused = !self.paused;
        }
        if keys.light {
            self.light_on = !self.light_on;
        }
        ControlOutcome {
            sphere_delta: keys.direction() * self.sphere_speed * frame_seconds,
            reset: keys.reset,
            quit: keys.quit,
        }
    }
}

/// Moves the solver's sphere by `delta`. A solver without a sphere is
/// left alone. Returns the new center, if any.
pub fn nudge_sphere<B: ComputeBackend>(
    solver: &mut ClothSolver<B>,
    delta: Vec3,
) -> LoomResult<Option<Vec3>> {
    let Some(mut sphere) = solver.sphere().copied() else {
        return Ok(None);
    };
    if delta == Vec3::ZERO {
        return Ok(Some(Vec3::from_array(sphere.center)));
    }
    let center = Vec3::from_array(sphere.center) + delta;
    sphere.center = center.to_array();
    solver.set_sphere(Some(sphere))?;
    Ok(Some(center))
}
