//! Physical constants and simulation defaults.
//!
//! Defaults reproduce the reference cloth scene: a 100×100 particle sheet
//! spanning 50×50 units, stepped at a fixed `dt` of 0.1.

/// Default downward gravitational acceleration (units/s²).
pub const DEFAULT_GRAVITY: f32 = -5.0;

/// Default velocity-proportional damping applied with gravity.
/// Negative values oppose motion (air drag).
pub const DEFAULT_GRAVITY_DAMPING: f32 = -0.3;

/// Default fixed simulation timestep (seconds).
pub const DEFAULT_DT: f32 = 0.1;

/// Default mass of a single particle.
pub const DEFAULT_PARTICLE_MASS: f32 = 1.0;

/// Default particle count along each grid axis.
pub const DEFAULT_GRID_POINTS: usize = 100;

/// Default physical extent of the cloth along each axis.
pub const DEFAULT_GRID_EXTENT: f32 = 50.0;

/// Default stiffness of structural and shear springs.
pub const DEFAULT_STIFFNESS: f32 = 10.0;

/// Default stiffness of flexion (bending) springs.
pub const DEFAULT_FLEXION_STIFFNESS: f32 = 5.0;

/// Default damping coefficient along each spring axis.
pub const DEFAULT_SPRING_DAMPING: f32 = 0.5;

/// Default sphere collider radius.
pub const DEFAULT_SPHERE_RADIUS: f32 = 20.0;

/// Smallest grid dimension accepted along either axis.
pub const MIN_GRID_POINTS: usize = 2;

/// `stiffness * dt² / mass` above which semi-implicit Euler is
/// reported as likely unstable.
pub const STABILITY_WARN_RATIO: f32 = 1.0;

/// Epsilon for degenerate lengths (coincident points).
pub const EPSILON: f32 = 1.0e-7;

/// Distance tolerance used when counting particles resting on a collider.
pub const CONTACT_TOLERANCE: f32 = 1.0e-3;
