//! Renderer trait and the headless implementation.

use loom_mesh::StripIndices;
use loom_types::LoomResult;

use crate::adapter::{BufferHandle, VertexSource};

/// An owned snapshot of one drawable frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Steps taken when the frame was captured.
    pub step: u64,
    /// Buffer the frame was copied from.
    pub handle: BufferHandle,
    pub positions: Vec<[f32; 3]>,
}

impl RenderFrame {
    pub fn from_source(step: u64, source: &VertexSource<'_>) -> Self {
        Self {
            step,
            handle: source.handle,
            positions: source
                .particles
                .iter()
                .map(|p| p.position.to_array())
                .collect(),
        }
    }
}

/// Trait for consumers of rendered frames.
///
/// # Implementations
/// - [`HeadlessRenderer`]: Discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): Writes frames to a JSON file
pub trait Renderer: Send {
    /// Receives the fixed draw sequence and vertex count once.
    fn init(&mut self, strips: &StripIndices, vertex_count: usize) -> LoomResult<()>;

    fn submit_frame(&mut self, frame: &RenderFrame) -> LoomResult<()>;

    /// Flush buffers, close files.
    fn finalize(&mut self) -> LoomResult<()>;

    fn name(&self) -> &str;

    fn frame_count(&self) -> u32;
}

/// Discards all frames.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _strips: &StripIndices, _vertex_count: usize) -> LoomResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> LoomResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> LoomResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
