//! Window management system
//!
//! Handles window creation, fullscreen toggle, the drag cursor, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{CursorIcon, Fullscreen, Theme, Window},
};

use hyperview_core::PlaneAngles;
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    dragging: bool,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );
        window.set_cursor(CursorIcon::Grab);

        Ok(Self {
            window,
            dragging: false,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext and scheduler creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Check if the system reports a dark theme; `None` if unknown
    pub fn prefers_dark(&self) -> Option<bool> {
        self.window.theme().map(|theme| theme == Theme::Dark)
    }

    /// Show a closed hand while dragging, an open one otherwise
    pub fn set_dragging(&mut self, dragging: bool) {
        if self.dragging == dragging {
            return;
        }
        self.dragging = dragging;
        self.window.set_cursor(if dragging {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        });
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with the current W-plane angles
    pub fn update_title(&self, angles: &PlaneAngles) {
        self.window.set_title(&format_title(&self.base_title, angles));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn format_title(base: &str, angles: &PlaneAngles) -> String {
    format!(
        "{} - XW:{:.2} YW:{:.2} ZW:{:.2}",
        base, angles.xw, angles.yw, angles.zw
    )
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_formatting() {
        let angles = PlaneAngles { xw: 0.2, yw: -0.1, zw: 1.0 / 3.0, ..PlaneAngles::ZERO };
        let title = format_title("Hypercube", &angles);
        assert_eq!(title, "Hypercube - XW:0.20 YW:-0.10 ZW:0.33");
    }

    #[test]
    fn test_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(format!("{}", err), "Window creation failed: no display");
    }
}
