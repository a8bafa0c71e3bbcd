//! Pointer event vocabulary and winit mouse translation
//!
//! winit reports cursor motion and button changes as separate events.
//! [`PointerTracker`] pairs them up into drag events in canvas space.

use hyperview_math::Vec2;
use winit::event::{ElementState, MouseButton};

/// A drag event in canvas coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    DragStart { x: f64, y: f64 },
    DragMove { x: f64, y: f64 },
    /// Released anywhere, not only over the canvas
    DragEnd,
}

impl PointerEvent {
    pub fn start_at(pos: Vec2) -> Self {
        PointerEvent::DragStart { x: pos.x, y: pos.y }
    }

    pub fn move_to(pos: Vec2) -> Self {
        PointerEvent::DragMove { x: pos.x, y: pos.y }
    }
}

/// Tracks cursor position and the left button to produce [`PointerEvent`]s
///
/// Drags only start on the canvas. Once started, motion and release are
/// reported wherever the cursor is.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    cursor: Option<Vec2>,
    held: bool,
    canvas: Option<(f64, f64)>,
}

impl PointerTracker {
    /// Tracker that accepts presses anywhere
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that only starts drags inside a `width` × `height` canvas
    pub fn with_canvas(width: f64, height: f64) -> Self {
        Self {
            canvas: Some((width, height)),
            ..Self::default()
        }
    }

    /// Check if a canvas-space position lies on the canvas
    pub fn on_canvas(&self, pos: Vec2) -> bool {
        match self.canvas {
            Some((width, height)) => {
                pos.x >= 0.0 && pos.x < width && pos.y >= 0.0 && pos.y < height
            }
            None => pos.is_finite(),
        }
    }

    /// Last known cursor position in canvas space
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Check if the left button is held
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Process cursor movement (already mapped into canvas space)
    pub fn cursor_moved(&mut self, pos: Vec2) -> Option<PointerEvent> {
        self.cursor = Some(pos);
        self.held.then(|| PointerEvent::move_to(pos))
    }

    /// Process a mouse button change
    pub fn mouse_input(&mut self, button: MouseButton, state: ElementState) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                // A press before any cursor motion has no position to start from
                let Some(pos) = self.cursor else {
                    log::debug!("Ignoring press with unknown cursor position");
                    return None;
                };
                if !self.on_canvas(pos) {
                    log::debug!("Ignoring press outside the canvas at {:?}", pos);
                    return None;
                }
                self.held = true;
                Some(PointerEvent::start_at(pos))
            }
            ElementState::Released => self.release(),
        }
    }

    /// Window lost focus; a held button will never report its release
    pub fn focus_lost(&mut self) -> Option<PointerEvent> {
        self.release()
    }

    fn release(&mut self) -> Option<PointerEvent> {
        if self.held {
            self.held = false;
            Some(PointerEvent::DragEnd)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_without_button_is_silent() {
        let mut t = PointerTracker::new();
        assert_eq!(t.cursor_moved(Vec2::new(1.0, 2.0)), None);
        assert_eq!(t.cursor(), Some(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn test_press_move_release() {
        let mut t = PointerTracker::new();
        t.cursor_moved(Vec2::new(10.0, 10.0));
        assert_eq!(
            t.mouse_input(MouseButton::Left, ElementState::Pressed),
            Some(PointerEvent::DragStart { x: 10.0, y: 10.0 })
        );
        assert_eq!(
            t.cursor_moved(Vec2::new(12.0, 9.0)),
            Some(PointerEvent::DragMove { x: 12.0, y: 9.0 })
        );
        assert_eq!(
            t.mouse_input(MouseButton::Left, ElementState::Released),
            Some(PointerEvent::DragEnd)
        );
        assert!(!t.is_held());
    }

    #[test]
    fn test_press_before_any_motion_ignored() {
        let mut t = PointerTracker::new();
        assert_eq!(t.mouse_input(MouseButton::Left, ElementState::Pressed), None);
        assert!(!t.is_held());
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut t = PointerTracker::new();
        t.cursor_moved(Vec2::ZERO);
        assert_eq!(t.mouse_input(MouseButton::Right, ElementState::Pressed), None);
        assert_eq!(t.mouse_input(MouseButton::Middle, ElementState::Released), None);
    }

    #[test]
    fn test_focus_loss_ends_drag() {
        let mut t = PointerTracker::new();
        t.cursor_moved(Vec2::ZERO);
        t.mouse_input(MouseButton::Left, ElementState::Pressed);
        assert_eq!(t.focus_lost(), Some(PointerEvent::DragEnd));
        assert_eq!(t.focus_lost(), None);
    }

    #[test]
    fn test_press_in_letterbox_bar_ignored() {
        // 1200x800 canvas in a 1600x800 window: window x=50 maps to canvas x=-150
        let mut t = PointerTracker::with_canvas(1200.0, 800.0);
        t.cursor_moved(Vec2::new(-150.0, 400.0));
        assert_eq!(t.mouse_input(MouseButton::Left, ElementState::Pressed), None);
        assert!(!t.is_held());
        assert_eq!(t.cursor_moved(Vec2::new(-50.0, 400.0)), None);
    }

    #[test]
    fn test_press_below_canvas_ignored() {
        let mut t = PointerTracker::with_canvas(1200.0, 800.0);
        t.cursor_moved(Vec2::new(600.0, 800.0));
        assert_eq!(t.mouse_input(MouseButton::Left, ElementState::Pressed), None);
    }

    #[test]
    fn test_drag_continues_off_canvas() {
        let mut t = PointerTracker::with_canvas(1200.0, 800.0);
        t.cursor_moved(Vec2::new(1190.0, 400.0));
        assert_eq!(
            t.mouse_input(MouseButton::Left, ElementState::Pressed),
            Some(PointerEvent::DragStart { x: 1190.0, y: 400.0 })
        );
        assert_eq!(
            t.cursor_moved(Vec2::new(1300.0, 400.0)),
            Some(PointerEvent::DragMove { x: 1300.0, y: 400.0 })
        );
        assert_eq!(
            t.mouse_input(MouseButton::Left, ElementState::Released),
            Some(PointerEvent::DragEnd)
        );
    }

    #[test]
    fn test_release_without_press_is_silent() {
        let mut t = PointerTracker::new();
        assert_eq!(t.mouse_input(MouseButton::Left, ElementState::Released), None);
    }
}
