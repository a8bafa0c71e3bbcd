//! Perspective projection from 4D down to a 2D screen
//!
//! Two perspective stages are chained: 4D → 3D with the camera at distance
//! `w_distance` along W, then 3D → 2D with the camera at `z_distance` along Z.
//! Neither divisor is guarded. A point sitting exactly at the camera distance
//! produces non-finite coordinates, which are passed through untouched.

use serde::{Serialize, Deserialize};

use crate::{Vec2, Vec3, Vec4};

/// Perspective 4D → 3D: factor = d / (d − w)
#[inline]
pub fn project_4d_to_3d(p: Vec4, distance: f64) -> Vec3 {
    let factor = distance / (distance - p.w);
    Vec3::new(p.x * factor, p.y * factor, p.z * factor)
}

/// Perspective 3D → 2D: factor = d / (d − z)
#[inline]
pub fn project_3d_to_2d(p: Vec3, distance: f64) -> Vec2 {
    let factor = distance / (distance - p.z);
    Vec2::new(p.x * factor, p.y * factor)
}

/// Full projection chain from a rotated 4D point to screen coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Camera distance along W for the 4D → 3D stage
    pub w_distance: f64,
    /// Camera distance along Z for the 3D → 2D stage
    pub z_distance: f64,
    /// Pixels per projected unit
    pub scale: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            w_distance: 2.0,
            z_distance: 3.0,
            scale: 250.0,
        }
    }
}

impl Projection {
    /// Project to the unscaled image plane
    #[inline]
    pub fn project(&self, p: Vec4) -> Vec2 {
        project_3d_to_2d(project_4d_to_3d(p, self.w_distance), self.z_distance)
    }

    /// Project, scale, and center on a `width` × `height` screen
    pub fn to_screen(&self, p: Vec4, width: f64, height: f64) -> Vec2 {
        let flat = self.project(p);
        Vec2::new(
            flat.x * self.scale + width / 2.0,
            flat.y * self.scale + height / 2.0,
        )
    }
}
