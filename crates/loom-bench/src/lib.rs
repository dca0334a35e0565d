//! # loom-bench
//!
//! Headless scenario runs for the cloth solver.
//!
//! Provides four preset scenarios, a runner that steps a [`Scenario`] on
//! any compute backend, and [`RunMetrics`] with CSV export for
//! regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::{RunMetrics, StepTimeStats};
pub use runner::ScenarioRunner;
pub use scenarios::{Scenario, ScenarioKind};
