//! # loom-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the loom cloth simulation engine.
//!
//! This crate has zero domain logic; it defines the vocabulary
//! that all other loom crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{LoomError, LoomResult};
pub use ids::{GridCoord, ParticleId};
