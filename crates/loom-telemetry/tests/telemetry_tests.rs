//! Integration tests for loom-telemetry.

use std::thread;

use loom_telemetry::{EventBus, EventKind, EventSink, SimulationEvent, TracingSink, VecSink};

// ─── Bus Tests ────────────────────────────────────────────────

#[test]
fn emit_and_flush_in_order() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(1, EventKind::StepBegin { sim_time: 0.0 });
    bus.emit(1, EventKind::StepEnd { wall_time: 0.001 });
    assert!(sink.is_empty(), "events are held until flush");

    assert_eq!(bus.flush(), 2);
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0].kind, EventKind::StepBegin { .. }));
    assert!(matches!(events[1].kind, EventKind::StepEnd { .. }));
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    let emitter = bus.emitter();
    bus.set_enabled(false);
    assert!(!emitter.is_enabled());
    emitter.emit(0, EventKind::Contact { contact_count: 1 });
    assert!(!bus.is_enabled());

    bus.emit(0, EventKind::StepBegin { sim_time: 0.0 });
    assert_eq!(bus.flush(), 0);
    assert!(sink.is_empty());
}

#[test]
fn every_sink_sees_every_event() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    bus.add_sink(Box::new(TracingSink::default()));
    assert_eq!(bus.sink_count(), 3);

    bus.emit(3, EventKind::Contact { contact_count: 12 });
    bus.flush();
    assert_eq!(a.events(), b.events());
    assert_eq!(a.len(), 1);
}

#[test]
fn finish_finalizes_sinks() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.emit(9, EventKind::StepEnd { wall_time: 0.5 });
    bus.finish();
    assert!(sink.is_finalized());
    assert_eq!(sink.len(), 1);
}

#[test]
fn emitters_send_from_other_threads() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    let workers: Vec<_> = (0..4u64)
        .map(|n| {
            let emitter = bus.emitter();
            thread::spawn(move || emitter.emit(n, EventKind::StepEnd { wall_time: 0.0 }))
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(bus.flush(), 4);
    let mut steps: Vec<u64> = sink.events().iter().map(|e| e.step).collect();
    steps.sort_unstable();
    assert_eq!(steps, vec![0, 1, 2, 3]);
}

#[test]
fn delivered_counts_across_flushes() {
    let mut bus = EventBus::new();
    bus.emit(1, EventKind::StepBegin { sim_time: 0.0 });
    assert_eq!(bus.flush(), 1);
    bus.emit(2, EventKind::StepBegin { sim_time: 0.1 });
    bus.emit(2, EventKind::StepEnd { wall_time: 0.0 });
    assert_eq!(bus.finish(), 3);
    assert_eq!(bus.delivered(), 3);
}

#[test]
fn emitter_outliving_bus_is_silent() {
    let bus = EventBus::new();
    let emitter = bus.emitter();
    drop(bus);
    emitter.emit(1, EventKind::StepBegin { sim_time: 0.0 });
}

#[test]
fn sink_names() {
    assert_eq!(VecSink::new().name(), "vec_sink");
    assert_eq!(TracingSink::new(tracing::Level::INFO).name(), "tracing_sink");
}

// ─── Serialization Tests ──────────────────────────────────────

#[test]
fn energy_event_json() {
    let event = SimulationEvent::new(
        5,
        EventKind::Energy {
            kinetic: 1.0,
            elastic: 0.5,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"energy\""), "{json}");
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn event_kinds_are_tagged() {
    let event = SimulationEvent::new(2, EventKind::Contact { contact_count: 7 });
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"contact\""), "{json}");
    assert!(json.contains("\"contact_count\":7"), "{json}");
}
