//! # loom-contact
//!
//! Collision response against a single rigid sphere.
//!
//! The resolver works on one particle at a time and holds no mutable
//! state, so the integration kernel can invoke it inline from every
//! parallel task.

pub mod response;
pub mod sphere;

pub use response::{ContactOutcome, ContactReport};
pub use sphere::SphereCollider;
