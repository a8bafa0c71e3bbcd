//! Drag controller for W-plane rotation
//!
//! Two states: `Idle` and `Dragging { last }`.
//!
//! - Drag start: remember the pointer, enter `Dragging`
//! - Drag move: horizontal motion spins XW, vertical motion spins YW,
//!   and their blend spins ZW
//! - Drag end: back to `Idle`, wherever the pointer was released

use hyperview_math::Vec2;

use crate::PointerEvent;

/// Angular change for the three planes that touch W, in radians
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngularStep {
    pub xw: f64,
    pub yw: f64,
    pub zw: f64,
}

impl AngularStep {
    pub const ZERO: Self = Self { xw: 0.0, yw: 0.0, zw: 0.0 };

    /// Scale every component
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            xw: self.xw * factor,
            yw: self.yw * factor,
            zw: self.zw * factor,
        }
    }
}

/// Drag state machine
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { last: Vec2 },
}

/// What a pointer event did to the drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragResponse {
    /// A drag began; any leftover momentum should stop
    Started,
    /// The pointer moved while dragging; apply this step and keep it as momentum
    Rotated(AngularStep),
    /// The pointer reported no movement while dragging; momentum should stop
    Stalled,
    /// The drag ended; momentum carries on from the last step
    Released,
    /// Nothing to do (moves or releases while idle)
    Ignored,
}

/// Converts pointer drags into angular steps
#[derive(Clone, Debug)]
pub struct DragController {
    state: DragState,

    // Configuration
    pub sensitivity: f64,
    pub zw_blend: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            sensitivity: 0.002, // radians per pixel
            zw_blend: 0.5,
        }
    }

    /// Current state
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Dispatch a pointer event to the matching transition
    pub fn handle(&mut self, event: PointerEvent) -> DragResponse {
        match event {
            PointerEvent::DragStart { x, y } => self.begin(Vec2::new(x, y)),
            PointerEvent::DragMove { x, y } => self.drag_to(Vec2::new(x, y)),
            PointerEvent::DragEnd => self.end(),
        }
    }

    /// Pointer pressed at `pos`
    ///
    /// Pressing again mid-drag restarts the drag from the new position.
    pub fn begin(&mut self, pos: Vec2) -> DragResponse {
        self.state = DragState::Dragging { last: pos };
        DragResponse::Started
    }

    /// Pointer moved to `pos`
    pub fn drag_to(&mut self, pos: Vec2) -> DragResponse {
        let DragState::Dragging { last } = self.state else {
            return DragResponse::Ignored;
        };

        let delta = pos - last;
        if delta.x == 0.0 && delta.y == 0.0 {
            // Last position is kept so the next real move measures from it
            return DragResponse::Stalled;
        }

        self.state = DragState::Dragging { last: pos };
        DragResponse::Rotated(self.angular_step(delta))
    }

    /// Pointer released
    pub fn end(&mut self) -> DragResponse {
        if self.is_dragging() {
            self.state = DragState::Idle;
            DragResponse::Released
        } else {
            DragResponse::Ignored
        }
    }

    /// Drop any drag in progress without reporting a release
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Angular step for a pointer delta in surface units
    pub fn angular_step(&self, delta: Vec2) -> AngularStep {
        let s = self.sensitivity;
        AngularStep {
            xw: delta.x * s,
            yw: delta.y * s,
            zw: (delta.x + delta.y) * s * self.zw_blend,
        }
    }

    /// Builder: set radians per pointer unit
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Builder: set how much of (dx + dy) feeds the ZW plane
    pub fn with_zw_blend(mut self, blend: f64) -> Self {
        self.zw_blend = blend;
        self
    }
}
