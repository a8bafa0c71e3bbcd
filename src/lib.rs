//! Hypercube viewer application
//!
//! Configuration, special-key mapping, and the window/render/scheduling
//! systems that host a [`hyperview_core::Session`] in a winit event loop.

pub mod config;
pub mod input;
pub mod systems;
