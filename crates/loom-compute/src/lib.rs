//! # loom-compute
//!
//! Kernel dispatch abstraction for the loom cloth engine.
//!
//! Provides a [`ComputeBackend`] trait with two implementations:
//! - [`SerialBackend`]: Sequential reference (deterministic order, no threads)
//! - [`ParallelBackend`]: Work-stealing data-parallel map via `rayon`
//!
//! A kernel is written once against the trait and runs unchanged on
//! either backend. Both produce identical results for kernels that only
//! read shared inputs and write their own output slot.

pub mod backend;

pub use backend::{ComputeBackend, ParallelBackend, SerialBackend};
