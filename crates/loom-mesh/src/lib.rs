//! # loom-mesh
//!
//! Rectangular cloth lattice and the connectivity implied by grid adjacency.
//!
//! ## Key Types
//!
//! - [`GridSpec`]: Lattice dimensions, physical extent, and placement.
//! - [`ClothGrid`]: Rest positions, UVs, normals, springs, and draw strips
//!   generated once from a [`GridSpec`].
//! - [`SpringTopology`]: Unique springs plus a per-particle adjacency list.
//! - [`StripIndices`]: Triangle-strip draw sequence, one strip per row pair.

pub mod grid;
pub mod normals;
pub mod strips;
pub mod topology;

pub use grid::{ClothGrid, GridSpec};
pub use strips::StripIndices;
pub use topology::{Neighbor, Spring, SpringKind, SpringTopology};
