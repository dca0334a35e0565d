//! # loom-solver
//!
//! Cloth dynamics: configuration, particle state buffers, the per-particle
//! force and integration kernel, and the stepping driver.
//!
//! ## Key Types
//!
//! - [`ClothConfig`]: Grid, spring coefficients, gravity, mass, `dt`, sphere
//! - [`StateBufferSet`]: Three particle buffers with rotating roles
//! - [`ClothSolver`]: Runs one fixed step across all particles per call
//!
//! ## Step model
//!
//! Every step reads only the buffer holding the [`Role::Current`] state and
//! writes only the buffer holding [`Role::PreviousPrevious`]. Each particle
//! is computed independently, so the write pass is a data-parallel map
//! with no locking. Roles rotate once the map has finished.

pub mod config;
pub mod forces;
pub mod kernel;
pub mod solver;
pub mod state;

pub use config::{ClothConfig, SphereConfig, SpringCoefficients, SpringConfig};
pub use kernel::StepParams;
pub use solver::{ClothSolver, StepResult};
pub use state::{Particle, Role, StateBufferSet};
