//! Interactive Bevy viewer for loom cloth simulations.
//!
//! The frame loop drives the solver through [`loom_render::RenderAdapter`]:
//! one fixed step per frame unless paused, then the current buffer is
//! uploaded as the cloth mesh. Keyboard state is translated into a
//! [`controls::KeyState`] and applied through [`controls::ViewerControls`],
//! a resource owned by the app.

pub mod controls;
mod scene;

pub use controls::{ControlOutcome, KeyState, ViewerControls};
pub use scene::launch_viewer;
