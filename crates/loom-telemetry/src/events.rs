//! Simulation event types.
//!
//! Lightweight value types emitted around each step. They carry just
//! enough data for monitoring a run.

use serde::{Deserialize, Serialize};

/// A simulation event tagged with the step it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (1-based; 0 for events before the first step).
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Step started.
    StepBegin {
        /// Simulated time at the start of the step (seconds).
        sim_time: f64,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time spent in the step (seconds).
        wall_time: f64,
    },

    /// Sphere contact count after the step.
    Contact { contact_count: u32 },

    /// Energy snapshot of the current state.
    Energy {
        /// `Σ ½ m |v|²`.
        kinetic: f64,
        /// `Σ ½ k (|d| - L0)²` over all springs.
        elastic: f64,
    },
}

impl SimulationEvent {
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
