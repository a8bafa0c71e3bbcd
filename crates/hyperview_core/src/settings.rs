//! Tunable constants for a visualizer instance

use hyperview_math::Projection;

/// Settings a [`crate::HypercubeVisualizer`] is built from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualizerSettings {
    /// Radians of rotation per unit of pointer movement
    pub sensitivity: f64,
    /// Share of (dx + dy) applied to the ZW plane
    pub zw_blend: f64,
    /// Fraction of momentum kept each frame
    pub friction: f64,
    /// 4D → 3D → 2D projection constants
    pub projection: Projection,
    /// Edge stroke width
    pub edge_width: f64,
    /// Vertex dot radius
    pub vertex_radius: f64,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            sensitivity: 0.002,
            zw_blend: 0.5,
            friction: 0.995,
            projection: Projection::default(),
            edge_width: 2.0,
            vertex_radius: 4.0,
        }
    }
}
