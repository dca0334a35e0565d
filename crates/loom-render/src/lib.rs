//! # loom-render
//!
//! Boundary between the solver and anything that draws it.
//!
//! [`RenderAdapter`] is the two-request interface a frame loop needs:
//! advance one fixed step, then borrow the current buffer as a
//! [`VertexSource`]. [`Renderer`] implementations consume frames built
//! from that source: [`HeadlessRenderer`] counts them and
//! [`JsonFrameExporter`] writes them to disk.

pub mod adapter;
pub mod json_exporter;
pub mod renderer;

pub use adapter::{BufferHandle, RenderAdapter, VertexSource};
pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
