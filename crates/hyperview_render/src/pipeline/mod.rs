//! Canvas render pipeline
//!
//! A single pipeline draws the triangle list produced by a `DrawBatch`.

pub mod types;
pub mod canvas_pipeline;

pub use types::{CanvasVertex, CanvasUniforms};
pub use canvas_pipeline::{CanvasPipeline, srgb_to_linear};
