//! Plane rotations in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! Rotations in different planes do not commute, so [`PlaneAngles::rotate`]
//! always applies them one after another in [`RotationPlane::ORDER`], each step
//! working on the coordinates produced by the previous one.

use serde::{Serialize, Deserialize};

use crate::Vec4;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// XY plane - standard yaw (rotation around Z axis in 3D)
    XY,
    /// XZ plane - standard pitch (rotation around Y axis in 3D)
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - standard roll (rotation around X axis in 3D)
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// Application order of the sequential rotation
    pub const ORDER: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Axis indices (0=X, 1=Y, 2=Z, 3=W) spanning this plane
    pub fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }
}

/// Rotate `v` by `angle` radians within a single plane
///
/// For plane coordinates (a, b): (a·cosθ − b·sinθ, a·sinθ + b·cosθ).
/// The two remaining coordinates are untouched.
pub fn rotate_in_plane(v: Vec4, plane: RotationPlane, angle: f64) -> Vec4 {
    let (i, j) = plane.axes();
    let (sin, cos) = angle.sin_cos();
    let mut c = v.to_array();
    let (a, b) = (c[i], c[j]);
    c[i] = a * cos - b * sin;
    c[j] = a * sin + b * cos;
    Vec4::from(c)
}

/// One angle per rotation plane, in radians
///
/// Angles are never wrapped into [0, 2π); they accumulate freely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaneAngles {
    pub xy: f64,
    pub xz: f64,
    pub xw: f64,
    pub yz: f64,
    pub yw: f64,
    pub zw: f64,
}

impl PlaneAngles {
    /// All six angles zero (identity rotation)
    pub const ZERO: Self = Self { xy: 0.0, xz: 0.0, xw: 0.0, yz: 0.0, yw: 0.0, zw: 0.0 };

    /// Angle of a single plane
    pub fn get(&self, plane: RotationPlane) -> f64 {
        match plane {
            RotationPlane::XY => self.xy,
            RotationPlane::XZ => self.xz,
            RotationPlane::XW => self.xw,
            RotationPlane::YZ => self.yz,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }

    fn slot(&mut self, plane: RotationPlane) -> &mut f64 {
        match plane {
            RotationPlane::XY => &mut self.xy,
            RotationPlane::XZ => &mut self.xz,
            RotationPlane::XW => &mut self.xw,
            RotationPlane::YZ => &mut self.yz,
            RotationPlane::YW => &mut self.yw,
            RotationPlane::ZW => &mut self.zw,
        }
    }

    /// Set the angle of a single plane
    pub fn set(&mut self, plane: RotationPlane, angle: f64) {
        *self.slot(plane) = angle;
    }

    /// Add `delta` radians to a single plane
    pub fn add(&mut self, plane: RotationPlane, delta: f64) {
        *self.slot(plane) += delta;
    }

    /// Builder: set one plane's angle
    pub fn with(mut self, plane: RotationPlane, angle: f64) -> Self {
        self.set(plane, angle);
        self
    }

    /// Apply all six plane rotations to `v` in [`RotationPlane::ORDER`]
    pub fn rotate(&self, v: Vec4) -> Vec4 {
        RotationPlane::ORDER
            .iter()
            .fold(v, |acc, &plane| rotate_in_plane(acc, plane, self.get(plane)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_zero_angles_is_identity() {
        let v = Vec4::new(0.3, -1.0, 2.5, -0.7);
        assert_eq!(PlaneAngles::ZERO.rotate(v), v);
    }

    #[test]
    fn test_xy_half_turn_negates_x_and_y() {
        let angles = PlaneAngles::ZERO.with(RotationPlane::XY, PI);
        let r = angles.rotate(Vec4::ONE);
        assert!(approx_eq(r, Vec4::new(-1.0, -1.0, 1.0, 1.0)), "got {:?}", r);
    }

    #[test]
    fn test_quarter_turn_in_each_plane() {
        // A quarter turn maps the first axis of the plane onto the second
        for plane in RotationPlane::ORDER {
            let (i, j) = plane.axes();
            let mut basis = [0.0; 4];
            basis[i] = 1.0;
            let r = rotate_in_plane(Vec4::from(basis), plane, FRAC_PI_2);
            let mut expected = [0.0; 4];
            expected[j] = 1.0;
            assert!(approx_eq(r, Vec4::from(expected)), "{:?}: got {:?}", plane, r);
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let angles = PlaneAngles { xy: 0.1, xz: -0.4, xw: 1.3, yz: 2.0, yw: -0.9, zw: 0.25 };
        let v = Vec4::new(1.0, -1.0, 1.0, -1.0);
        assert!((angles.rotate(v).length() - v.length()).abs() < EPSILON);
    }

    #[test]
    fn test_sequential_order_matters() {
        // XZ then XW uses the x produced by XZ. Applying XW to the original
        // vector first gives a different result.
        let angles = PlaneAngles::ZERO
            .with(RotationPlane::XZ, FRAC_PI_2)
            .with(RotationPlane::XW, FRAC_PI_2);
        let v = Vec4::new(1.0, 0.0, 0.0, 0.0);
        let sequential = angles.rotate(v);
        // x → z by XZ; XW then sees x = 0, so z stays 1
        assert!(approx_eq(sequential, Vec4::new(0.0, 0.0, 1.0, 0.0)), "got {:?}", sequential);

        let reversed = rotate_in_plane(
            rotate_in_plane(v, RotationPlane::XW, FRAC_PI_2),
            RotationPlane::XZ,
            FRAC_PI_2,
        );
        assert!(!approx_eq(sequential, reversed));
    }

    #[test]
    fn test_get_set_add() {
        let mut angles = PlaneAngles::ZERO;
        angles.set(RotationPlane::YW, 0.5);
        angles.add(RotationPlane::YW, 0.25);
        angles.add(RotationPlane::ZW, -1.0);
        assert_eq!(angles.get(RotationPlane::YW), 0.75);
        assert_eq!(angles.zw, -1.0);
        assert_eq!(angles.xy, 0.0);
    }

    #[test]
    fn test_angles_are_not_wrapped() {
        let mut angles = PlaneAngles::ZERO;
        for _ in 0..10 {
            angles.add(RotationPlane::XW, PI);
        }
        assert!((angles.xw - 10.0 * PI).abs() < EPSILON);
    }
}
