//! Pointer Input Handling
//!
//! This crate turns raw pointer input into 4D rotation steps:
//! a click-and-drag on the canvas spins the hypercube in the three planes
//! that touch the W axis.

mod drag_controller;
mod pointer;

pub use drag_controller::{AngularStep, DragController, DragResponse, DragState};
pub use pointer::{PointerEvent, PointerTracker};
