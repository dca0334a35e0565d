//! Render adapter over the solver's current buffer.

use loom_compute::ComputeBackend;
use loom_math::Vec3;
use loom_mesh::normals::smooth_normals;
use loom_mesh::StripIndices;
use loom_solver::{ClothSolver, Particle, Role, StepResult};

/// Opaque identity of the buffer a [`VertexSource`] borrows.
///
/// `slot` is the physical buffer index and `generation` the buffer-set
/// generation when the source was taken. Two sources with equal handles view
/// the same committed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle {
    pub slot: usize,
    pub generation: u64,
}

/// Borrowed view of the renderable state plus the draw sequence.
#[derive(Debug, Clone, Copy)]
pub struct VertexSource<'a> {
    pub handle: BufferHandle,
    pub particles: &'a [Particle],
    pub strips: &'a StripIndices,
}

impl<'a> VertexSource<'a> {
    pub fn positions(&self) -> Vec<Vec3> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Area-weighted vertex normals of the deformed sheet.
    pub fn normals(&self) -> Vec<Vec3> {
        smooth_normals(&self.positions(), &self.triangle_indices())
    }

    /// The strip sequence converted to an upward-facing triangle list.
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.strips.to_triangle_list()
    }

    pub fn vertex_count(&self) -> usize {
        self.particles.len()
    }
}

/// What a frame loop asks of the simulation: one fixed step, then the
/// current state to draw.
pub trait RenderAdapter {
    /// Advances by exactly one `dt`.
    fn advance(&mut self) -> StepResult;

    /// Borrows the `Current` buffer. The borrow ends before the next
    /// `advance`, so a source never outlives a rotation.
    fn vertex_source(&self) -> VertexSource<'_>;
}

impl<B: ComputeBackend> RenderAdapter for ClothSolver<B> {
    fn advance(&mut self) -> StepResult {
        self.step()
    }

    fn vertex_source(&self) -> VertexSource<'_> {
        let buffers = self.buffers();
        VertexSource {
            handle: BufferHandle {
                slot: buffers.physical_index(Role::Current),
                generation: buffers.generation(),
            },
            particles: buffers.current(),
            strips: &self.grid().strips,
        }
    }
}
