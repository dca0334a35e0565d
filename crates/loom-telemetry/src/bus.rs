//! Step-event bus.
//!
//! Producers hold an [`EventEmitter`], a cloneable handle onto the bus
//! channel that may be moved to other threads. Events queue until the
//! owning [`EventBus`] drains them into its sinks with
//! [`EventBus::flush`], so sinks only ever run on the owner's thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use crate::events::{EventKind, SimulationEvent};
use crate::sinks::EventSink;

/// Producer handle for an [`EventBus`].
///
/// Every clone shares the bus's enable switch: disabling the bus mutes
/// emitters handed out earlier.
#[derive(Debug, Clone)]
pub struct EventEmitter {
    tx: mpsc::Sender<SimulationEvent>,
    enabled: Arc<AtomicBool>,
}

impl EventEmitter {
    /// Queues an event for `step`. Dropped while the bus is disabled.
    pub fn emit(&self, step: u64, kind: EventKind) {
        if !self.is_enabled() {
            return;
        }
        // Fails only once the bus is gone, leaving no sink to deliver to.
        let _ = self.tx.send(SimulationEvent::new(step, kind));
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

/// Owns the sinks and the receiving end of the event channel.
pub struct EventBus {
    emitter: EventEmitter,
    rx: mpsc::Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    delivered: u64,
}

impl EventBus {
    /// Creates an enabled bus with no sinks.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            emitter: EventEmitter {
                tx,
                enabled: Arc::new(AtomicBool::new(true)),
            },
            rx,
            sinks: Vec::new(),
            delivered: 0,
        }
    }

    /// A new producer handle onto this bus.
    pub fn emitter(&self) -> EventEmitter {
        self.emitter.clone()
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.emitter.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.emitter.is_enabled()
    }

    /// Queues an event through the bus's own emitter.
    pub fn emit(&self, step: u64, kind: EventKind) {
        self.emitter.emit(step, kind);
    }

    /// Hands every queued event to each sink in emission order and
    /// returns how many were delivered by this call.
    pub fn flush(&mut self) -> usize {
        let mut count = 0;
        for event in self.rx.try_iter() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            count += 1;
        }
        self.delivered += count as u64;
        count
    }

    /// Events delivered over the bus's lifetime.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Flushes, then finalizes every sink. Returns the lifetime total.
    pub fn finish(&mut self) -> u64 {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
        tracing::debug!(events = self.delivered, sinks = self.sinks.len(), "event bus finished");
        self.delivered
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
