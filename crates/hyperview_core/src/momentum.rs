//! Angular momentum left over after a drag
//!
//! Velocity is the last angular step the drag produced. Every idle frame it is
//! added to the W-plane angles and then multiplied by the friction factor.
//! There is no cutoff: the velocity shrinks geometrically toward zero without
//! ever being snapped to it.

use hyperview_input::AngularStep;
use hyperview_math::PlaneAngles;

/// W-plane angular velocity with multiplicative friction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Momentum {
    velocity: AngularStep,
    /// Fraction of velocity kept after each frame
    pub friction: f64,
}

impl Default for Momentum {
    fn default() -> Self {
        Self::new(0.995)
    }
}

impl Momentum {
    pub fn new(friction: f64) -> Self {
        Self {
            velocity: AngularStep::ZERO,
            friction,
        }
    }

    /// Current velocity, radians per frame
    pub fn velocity(&self) -> AngularStep {
        self.velocity
    }

    /// Replace the velocity with the latest drag step
    pub fn set(&mut self, step: AngularStep) {
        self.velocity = step;
    }

    /// Zero the velocity
    pub fn stop(&mut self) {
        self.velocity = AngularStep::ZERO;
    }

    /// Add the velocity to the XW, YW, and ZW angles
    pub fn apply_to(&self, angles: &mut PlaneAngles) {
        angles.xw += self.velocity.xw;
        angles.yw += self.velocity.yw;
        angles.zw += self.velocity.zw;
    }

    /// Multiply the velocity by the friction factor
    pub fn decay(&mut self) {
        self.velocity = self.velocity.scaled(self.friction);
    }

    /// Velocity expected after `frames` decays from `initial`
    pub fn decayed(initial: AngularStep, friction: f64, frames: u32) -> AngularStep {
        initial.scaled(friction.powf(frames as f64))
    }
}
