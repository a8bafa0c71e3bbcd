//! 2D Canvas Rendering
//!
//! This crate puts the visualizer's frames on screen with wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`batch::DrawBatch`] - A [`hyperview_core::Surface`] that tessellates lines and
//!   circles into triangles
//! - [`pipeline::CanvasPipeline`] - Draws a batch into a window region
//! - [`letterbox::Letterbox`] - Fits the fixed-size canvas into the window and maps
//!   cursor positions back into canvas space

pub mod context;
pub mod batch;
pub mod letterbox;
pub mod pipeline;

pub use batch::DrawBatch;
pub use context::{RenderContext, RenderError};
pub use letterbox::{Letterbox, Viewport};
pub use pipeline::{CanvasPipeline, CanvasUniforms, CanvasVertex};
