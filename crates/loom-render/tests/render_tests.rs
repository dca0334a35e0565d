//! Integration tests for loom-render.

use loom_compute::SerialBackend;
use loom_math::Vec3;
use loom_render::{HeadlessRenderer, JsonFrameExporter, RenderAdapter, RenderFrame, Renderer};
use loom_solver::{ClothConfig, ClothSolver};

fn solver(columns: usize, rows: usize) -> ClothSolver<SerialBackend> {
    ClothSolver::with_backend(ClothConfig::flat(columns, rows, 1.0), SerialBackend).unwrap()
}

// ─── Adapter Tests ────────────────────────────────────────────

#[test]
fn vertex_source_tracks_current_buffer() {
    let mut sim = solver(4, 3);
    let first = sim.vertex_source().handle;
    assert_eq!(first.slot, 0);
    assert_eq!(first.generation, 0);

    sim.advance();
    let second = sim.vertex_source().handle;
    assert_eq!(second.slot, 1);
    assert_eq!(second.generation, 1);

    sim.advance();
    sim.advance();
    let fourth = sim.vertex_source().handle;
    assert_eq!(fourth.slot, 0);
    assert_ne!(fourth, first);
}

#[test]
fn handles_differ_across_reset() {
    let mut sim = solver(4, 4);
    let before: Vec<_> = (0..4)
        .map(|_| {
            let handle = sim.vertex_source().handle;
            sim.advance();
            handle
        })
        .collect();

    sim.reset();
    for _ in 0..4 {
        let handle = sim.vertex_source().handle;
        assert!(!before.contains(&handle), "{handle:?} reused after reset");
        sim.advance();
    }
}

#[test]
fn vertex_source_reads_solver_state() {
    let mut sim = solver(4, 4);
    sim.advance();
    let source = sim.vertex_source();
    assert_eq!(source.vertex_count(), 16);
    assert_eq!(source.positions()[5], sim.current()[5].position);
    assert_eq!(source.strips.strip_count(), 3);
    assert_eq!(source.triangle_indices().len(), 3 * 2 * 3 * 3);
}

#[test]
fn flat_sheet_normals_point_up() {
    let sim = solver(5, 4);
    for n in sim.vertex_source().normals() {
        assert!((n - Vec3::Y).length() < 1e-6, "{n:?}");
    }
}

// ─── Renderer Tests ───────────────────────────────────────────

#[test]
fn headless_counts_frames() {
    let mut sim = solver(3, 3);
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&sim.grid().strips, sim.grid().particle_count()).unwrap();
    assert_eq!(renderer.name(), "headless");

    for _ in 0..4 {
        let result = sim.advance();
        let frame = RenderFrame::from_source(result.step, &sim.vertex_source());
        renderer.submit_frame(&frame).unwrap();
    }
    renderer.finalize().unwrap();
    assert_eq!(renderer.frame_count(), 4);
}

#[test]
fn render_frame_copies_positions() {
    let sim = solver(2, 2);
    let frame = RenderFrame::from_source(0, &sim.vertex_source());
    assert_eq!(frame.positions.len(), 4);
    assert_eq!(frame.positions[3], [1.0, 0.0, 1.0]);
}

#[test]
fn json_exporter_writes_frames_and_strips() {
    let path = std::env::temp_dir().join(format!("loom-frames-{}.json", std::process::id()));
    let mut sim = solver(3, 2);
    let mut exporter = JsonFrameExporter::new(&path);
    exporter.init(&sim.grid().strips, sim.grid().particle_count()).unwrap();
    for _ in 0..2 {
        let result = sim.advance();
        exporter
            .submit_frame(&RenderFrame::from_source(result.step, &sim.vertex_source()))
            .unwrap();
    }
    assert_eq!(exporter.frame_count(), 2);
    exporter.finalize().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["vertex_count"], 6);
    assert_eq!(json["strip_count"], 1);
    assert_eq!(json["strips"], serde_json::json!([3, 0, 4, 1, 5, 2]));
    assert_eq!(json["frames"].as_array().unwrap().len(), 2);
    assert_eq!(json["frames"][1]["step"], 2);
    assert_eq!(json["frames"][0]["positions"].as_array().unwrap().len(), 18);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn json_exporter_rejects_mismatched_frame() {
    let sim = solver(3, 3);
    let mut exporter = JsonFrameExporter::new(std::env::temp_dir().join("loom-unused.json"));
    exporter.init(&sim.grid().strips, 4).unwrap();
    let frame = RenderFrame::from_source(0, &sim.vertex_source());
    assert!(exporter.submit_frame(&frame).is_err());
}

#[test]
fn json_exporter_requires_init() {
    let mut exporter = JsonFrameExporter::new(std::env::temp_dir().join("loom-uninit.json"));
    assert!(exporter.finalize().is_err());
}
