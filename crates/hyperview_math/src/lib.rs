//! 4D Mathematics Library
//!
//! This crate provides the vector, rotation, projection, and shape types used
//! by the hypercube viewer.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] / [`Vec2`] - results of the two perspective projection stages
//! - [`PlaneAngles`] - six plane angles applied as a sequential 4D rotation
//! - [`Projection`] - 4D → 3D → 2D perspective onto a screen
//!
//! ## Shape Types
//!
//! - [`WireframeShape4D`] - Trait for 4D shapes drawn as vertices and edges
//! - [`Edge`] - An unordered pair of vertex indices
//! - [`Tesseract4D`] - A 4D hypercube

mod vec4;
mod vec;
pub mod rotation;
pub mod projection;
pub mod shape;
pub mod tesseract;

pub use vec4::Vec4;
pub use vec::{Vec2, Vec3};
pub use rotation::{PlaneAngles, RotationPlane, rotate_in_plane};
pub use projection::{Projection, project_3d_to_2d, project_4d_to_3d};
pub use shape::{Edge, WireframeShape4D};
pub use tesseract::Tesseract4D;
