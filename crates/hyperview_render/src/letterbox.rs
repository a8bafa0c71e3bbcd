//! Fitting a fixed-size canvas into a resizable window
//!
//! The canvas keeps its aspect ratio and is centered; the bars around it are
//! filled with the clear color. Cursor positions are mapped back through the
//! same transform so drag deltas stay in canvas units whatever the window size.

use hyperview_math::Vec2;

/// A rectangle of the window in physical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Canvas-to-window fit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Letterbox {
    canvas: (f64, f64),
    scale: f64,
    offset: Vec2,
}

impl Letterbox {
    /// Fit a `canvas` (width, height) into a `window` (width, height)
    pub fn fit(canvas: (f64, f64), window: (f64, f64)) -> Self {
        let scale = (window.0 / canvas.0).min(window.1 / canvas.1);
        let offset = Vec2::new(
            (window.0 - canvas.0 * scale) * 0.5,
            (window.1 - canvas.1 * scale) * 0.5,
        );
        Self {
            canvas,
            scale,
            offset,
        }
    }

    /// Window pixels per canvas unit
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Region of the window the canvas occupies
    pub fn viewport(&self) -> Viewport {
        Viewport {
            x: self.offset.x as f32,
            y: self.offset.y as f32,
            width: (self.canvas.0 * self.scale) as f32,
            height: (self.canvas.1 * self.scale) as f32,
        }
    }

    /// Map a window position to canvas coordinates
    ///
    /// Positions outside the canvas map outside `0..width` / `0..height`;
    /// a drag that leaves the canvas keeps tracking.
    pub fn to_canvas(&self, window_pos: Vec2) -> Vec2 {
        (window_pos - self.offset) * (1.0 / self.scale)
    }

    /// Check if the window has no drawable area
    pub fn is_empty(&self) -> bool {
        !self.scale.is_finite() || self.scale <= 0.0
    }
}
