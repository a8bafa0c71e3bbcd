//! GPU-compatible data types for the canvas pipeline
//!
//! These types match the layouts in `canvas.wgsl`.

use bytemuck::{Pod, Zeroable};

/// A triangle vertex in canvas coordinates with a straight (non-premultiplied) RGBA color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CanvasVertex {
    /// Position in canvas units, origin top-left, y down
    pub position: [f32; 2],
    /// RGBA color, sRGB encoded
    pub color: [f32; 4],
}

impl CanvasVertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the canvas shader
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CanvasUniforms {
    /// Logical canvas size in canvas units
    pub canvas_size: [f32; 2],
    /// Nonzero when the render target is an sRGB format and colors must be linearized
    pub srgb_target: u32,
    pub _padding: u32,
}
