//! Core types for the hypercube viewer
//!
//! This crate owns everything that happens between a pointer event and a
//! finished frame:
//!
//! - [`HypercubeVisualizer`] - Geometry, rotation angles, drag and momentum state
//! - [`Momentum`] - W-plane angular velocity with friction decay
//! - [`Palette`] / [`ColorScheme`] / [`ThemePreference`] - Colors picked once at startup
//! - [`Surface`] - Immediate-mode 2D drawing contract the visualizer renders onto
//! - [`Session`] / [`FrameScheduler`] - Frame scheduling and teardown around a visualizer
//! - [`VisualizerSettings`] - Tunable constants

mod momentum;
mod settings;
mod surface;
mod theme;
mod visualizer;
mod session;

pub use momentum::Momentum;
pub use settings::VisualizerSettings;
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use theme::{ColorScheme, Palette, Rgba, ThemePreference};
pub use visualizer::{HypercubeVisualizer, Snapshot};
pub use session::{FrameHandle, FrameScheduler, Session};

// Re-export commonly used types for convenience
pub use hyperview_math::{Edge, PlaneAngles, Projection, RotationPlane, Tesseract4D, Vec2, Vec4, WireframeShape4D};
pub use hyperview_input::{AngularStep, DragResponse, PointerEvent};
