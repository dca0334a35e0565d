//! # loom-math
//!
//! Linear algebra primitives for the loom cloth engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Vec2`)
//! - Small vector helpers shared by the force model and the collider

pub mod vector;

// Re-export glam types as the canonical math types for loom.
pub use glam::{Vec2, Vec3};
pub use vector::{normalize_or, project_onto};
