//! Immediate-mode 2D drawing contract
//!
//! Coordinates are logical surface units with the origin at the top left.
//! Primitives may arrive with non-finite coordinates when a projection
//! degenerates; implementations should draw nothing for those.

use hyperview_math::Vec2;

use crate::Rgba;

/// A 2D surface the visualizer draws a frame onto
pub trait Surface {
    /// Logical (width, height)
    fn size(&self) -> (f64, f64);

    /// Fill the whole surface with one color
    fn clear(&mut self, color: Rgba);

    /// Color and width for subsequent lines
    fn set_stroke(&mut self, color: Rgba, width: f64);

    /// Color for subsequent filled shapes
    fn set_fill(&mut self, color: Rgba);

    /// Straight line with the current stroke
    fn line(&mut self, from: Vec2, to: Vec2);

    /// Filled circle with the current fill
    fn filled_circle(&mut self, center: Vec2, radius: f64);
}

/// One recorded drawing call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    Stroke { color: Rgba, width: f64 },
    Fill(Rgba),
    Line { from: Vec2, to: Vec2 },
    Circle { center: Vec2, radius: f64 },
}

/// Surface that records calls instead of drawing (headless runs and tests)
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Everything recorded since the last [`RecordingSurface::take`]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded line segments
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line { from, to } => Some((from, to)),
            _ => None,
        })
    }

    /// Recorded circles
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f64)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Circle { center, radius } => Some((center, radius)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_stroke(&mut self, color: Rgba, width: f64) {
        self.commands.push(DrawCommand::Stroke { color, width });
    }

    fn set_fill(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn filled_circle(&mut self, center: Vec2, radius: f64) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }
}
