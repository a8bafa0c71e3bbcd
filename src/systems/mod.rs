//! Application systems
//!
//! Window, scheduling, and rendering pieces that `main.rs` wires together.

mod render;
mod scheduler;
mod window;

pub use render::{FrameError, RenderSystem};
pub use scheduler::RedrawScheduler;
pub use window::{WindowError, WindowSystem};
