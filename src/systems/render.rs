//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Canvas pipeline and per-frame draw batch
//! - Letterboxing the fixed canvas into the window

use std::sync::Arc;
use winit::window::Window;

use hyperview_core::{FrameScheduler, Session};
use hyperview_math::Vec2;
use hyperview_render::{CanvasPipeline, DrawBatch, Letterbox, RenderContext, RenderError};

/// Per-frame render failure
#[derive(Debug)]
pub enum FrameError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::SurfaceLost => write!(f, "Surface lost"),
            FrameError::OutOfMemory => write!(f, "Out of memory"),
            FrameError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for FrameError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: CanvasPipeline,
    batch: DrawBatch,
    canvas: (f64, f64),
    letterbox: Letterbox,
}

impl RenderSystem {
    /// Create render system for a window and a logical canvas size
    pub fn new(window: Arc<Window>, canvas: (f64, f64), vsync: bool) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let pipeline = CanvasPipeline::new(&context.device, context.config.format, canvas);
        let letterbox = Letterbox::fit(canvas, context.size_f64());

        log::info!(
            "Canvas {}x{} fitted at scale {:.3}",
            canvas.0,
            canvas.1,
            letterbox.scale()
        );

        Ok(Self {
            context,
            pipeline,
            batch: DrawBatch::new(canvas.0, canvas.1),
            canvas,
            letterbox,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.letterbox = Letterbox::fit(self.canvas, self.context.size_f64());
    }

    /// Reapply the surface configuration after it was lost
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Map a window position (physical pixels) into canvas coordinates
    pub fn to_canvas(&self, window_pos: Vec2) -> Vec2 {
        self.letterbox.to_canvas(window_pos)
    }

    /// Deliver one frame to the session and present it
    ///
    /// Returns `Ok(false)` without touching the surface when the session has
    /// no frame pending.
    pub fn render_frame<S: FrameScheduler>(
        &mut self,
        session: &mut Session<S>,
    ) -> Result<bool, FrameError> {
        if session.pending_frame().is_none() || self.letterbox.is_empty() {
            return Ok(false);
        }

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(FrameError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(FrameError::OutOfMemory),
            Err(e) => return Err(FrameError::Other(format!("{:?}", e))),
        };

        if !session.on_frame(&mut self.batch) {
            return Ok(false);
        }
        if self.batch.skipped() > 0 {
            log::debug!("Skipped {} non-finite primitives", self.batch.skipped());
        }

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Canvas Encoder"),
            });

        self.pipeline.render(
            &self.context.device,
            &self.context.queue,
            &mut encoder,
            &view,
            &self.batch,
            self.letterbox.viewport(),
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_error_display() {
        assert_eq!(format!("{}", FrameError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", FrameError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", FrameError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
