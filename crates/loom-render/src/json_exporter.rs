//! JSON frame exporter.
//!
//! Captures positions every frame and writes the whole run, together with
//! the strip draw sequence, to one JSON file on `finalize()`.

use std::path::PathBuf;

use serde::Serialize;

use loom_mesh::StripIndices;
use loom_types::{LoomError, LoomResult};

use crate::renderer::{RenderFrame, Renderer};

#[derive(Serialize)]
struct FrameData {
    step: u64,
    /// Interleaved `[x0, y0, z0, x1, ...]`.
    positions: Vec<f32>,
}

#[derive(Serialize)]
struct AnimationData<'a> {
    vertex_count: usize,
    columns: usize,
    rows: usize,
    strip_count: usize,
    indices_per_strip: usize,
    strips: &'a [u32],
    frames: &'a [FrameData],
}

/// Writes captured frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("frames.json");
/// exporter.init(&grid.strips, grid.particle_count())?;
/// // submit_frame() after each step
/// exporter.finalize()?;
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    strips: Option<StripIndices>,
    vertex_count: usize,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            strips: None,
            vertex_count: 0,
            frames: Vec::new(),
        }
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, strips: &StripIndices, vertex_count: usize) -> LoomResult<()> {
        self.strips = Some(strips.clone());
        self.vertex_count = vertex_count;
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> LoomResult<()> {
        if frame.positions.len() != self.vertex_count {
            return Err(LoomError::Render(format!(
                "frame has {} vertices, expected {}",
                frame.positions.len(),
                self.vertex_count
            )));
        }
        self.frames.push(FrameData {
            step: frame.step,
            positions: frame.positions.iter().flatten().copied().collect(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> LoomResult<()> {
        let strips = self
            .strips
            .as_ref()
            .ok_or_else(|| LoomError::Render("exporter finalized before init".into()))?;
        let data = AnimationData {
            vertex_count: self.vertex_count,
            columns: strips.columns(),
            rows: strips.rows(),
            strip_count: strips.strip_count(),
            indices_per_strip: strips.indices_per_strip(),
            strips: strips.as_slice(),
            frames: &self.frames,
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| LoomError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
