//! # loom-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (step timing, energy, sphere contacts) consumed by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::{EventBus, EventEmitter};
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
