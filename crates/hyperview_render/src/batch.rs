//! CPU tessellation of canvas drawing calls
//!
//! [`DrawBatch`] implements [`Surface`] by turning each line into a quad and
//! each filled circle into a triangle fan, ready for one draw call. `clear`
//! starts a new frame: it drops everything batched so far and records the
//! color the render pass clears to.

use hyperview_core::{Rgba, Surface};
use hyperview_math::Vec2;

use crate::pipeline::CanvasVertex;

/// Segments used to approximate a circle
pub const CIRCLE_SEGMENTS: usize = 24;

/// Triangle list for one frame of canvas drawing
#[derive(Clone, Debug)]
pub struct DrawBatch {
    width: f64,
    height: f64,
    clear_color: Rgba,
    stroke: Rgba,
    stroke_width: f64,
    fill: Rgba,
    vertices: Vec<CanvasVertex>,
    skipped: usize,
}

impl DrawBatch {
    /// Empty batch for a canvas of the given logical size
    pub fn new(width: f64, height: f64) -> Self {
        let black = Rgba::rgb(0, 0, 0);
        Self {
            width,
            height,
            clear_color: black,
            stroke: black,
            stroke_width: 1.0,
            fill: black,
            vertices: Vec::new(),
            skipped: 0,
        }
    }

    /// Batched triangle vertices
    pub fn vertices(&self) -> &[CanvasVertex] {
        &self.vertices
    }

    /// Number of batched vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Color of the last `clear`
    pub fn clear_color(&self) -> Rgba {
        self.clear_color
    }

    /// Primitives dropped since the last `clear` because of non-finite input
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        let color = color.to_array();
        for p in [a, b, c] {
            self.vertices
                .push(CanvasVertex::new([p.x as f32, p.y as f32], color));
        }
    }
}

impl Surface for DrawBatch {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba) {
        self.vertices.clear();
        self.clear_color = color;
        self.skipped = 0;
    }

    fn set_stroke(&mut self, color: Rgba, width: f64) {
        self.stroke = color;
        self.stroke_width = width;
    }

    fn set_fill(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        if !from.is_finite() || !to.is_finite() {
            self.skipped += 1;
            return;
        }

        let dir = to - from;
        let len = dir.length();
        if len == 0.0 {
            return;
        }

        // Butt caps: the quad ends exactly at the endpoints
        let half = self.stroke_width * 0.5;
        let normal = Vec2::new(-dir.y / len, dir.x / len) * half;

        let (a, b) = (from + normal, from - normal);
        let (c, d) = (to + normal, to - normal);
        let color = self.stroke;
        self.push_triangle(a, b, c, color);
        self.push_triangle(c, b, d, color);
    }

    fn filled_circle(&mut self, center: Vec2, radius: f64) {
        if !center.is_finite() || !radius.is_finite() {
            self.skipped += 1;
            return;
        }
        if radius <= 0.0 {
            return;
        }

        let step = std::f64::consts::TAU / CIRCLE_SEGMENTS as f64;
        let rim = |i: usize| {
            let (sin, cos) = (step * i as f64).sin_cos();
            center + Vec2::new(cos, sin) * radius
        };
        let color = self.fill;
        for i in 0..CIRCLE_SEGMENTS {
            self.push_triangle(center, rim(i), rim(i + 1), color);
        }
    }
}
