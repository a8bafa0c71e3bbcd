//! The hypercube visualizer
//!
//! One instance owns all state for a single view: the tesseract, the six
//! plane angles, the drag state machine, and the momentum. Nothing here is
//! global and nothing schedules itself; the host calls [`HypercubeVisualizer::tick`]
//! once per display frame and [`HypercubeVisualizer::render`] to draw it.
//!
//! Only the XW, YW, and ZW angles are ever changed. Neither the drag nor the
//! momentum reaches XY, XZ, or YZ, so those stay at zero for the whole session.

use hyperview_input::{AngularStep, DragController, DragResponse, PointerEvent};
use hyperview_math::{Edge, PlaneAngles, Projection, Tesseract4D, Vec2, Vec4, WireframeShape4D};

use crate::{ColorScheme, Momentum, Palette, Surface, VisualizerSettings};

/// Geometry and projected screen points for one frame
#[derive(Clone, Debug)]
pub struct Snapshot<'a> {
    pub vertices: &'a [Vec4],
    pub edges: &'a [Edge],
    /// Screen position of each vertex, same order as `vertices`
    pub screen: Vec<Vec2>,
}

/// Rotating, draggable tesseract wireframe
#[derive(Clone, Debug)]
pub struct HypercubeVisualizer {
    shape: Tesseract4D,
    angles: PlaneAngles,
    momentum: Momentum,
    drag: DragController,
    projection: Projection,
    palette: Palette,
    scheme: ColorScheme,
    edge_width: f64,
    vertex_radius: f64,
}

impl HypercubeVisualizer {
    /// Build the geometry and resolve colors for `scheme`
    pub fn new(settings: VisualizerSettings, scheme: ColorScheme) -> Self {
        let shape = Tesseract4D::new();
        log::debug!(
            "Hypercube ready: {} vertices, {} edges, {:?} palette",
            shape.vertex_count(),
            shape.edge_count(),
            scheme
        );

        Self {
            shape,
            angles: PlaneAngles::ZERO,
            momentum: Momentum::new(settings.friction),
            drag: DragController::new()
                .with_sensitivity(settings.sensitivity)
                .with_zw_blend(settings.zw_blend),
            projection: settings.projection,
            palette: scheme.palette(),
            scheme,
            edge_width: settings.edge_width,
            vertex_radius: settings.vertex_radius,
        }
    }

    /// Current plane angles
    pub fn angles(&self) -> PlaneAngles {
        self.angles
    }

    /// Current W-plane angular velocity
    pub fn velocity(&self) -> AngularStep {
        self.momentum.velocity()
    }

    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn shape(&self) -> &Tesseract4D {
        &self.shape
    }

    /// Feed one pointer event through the drag state machine
    pub fn pointer_event(&mut self, event: PointerEvent) -> DragResponse {
        let response = self.drag.handle(event);
        match response {
            DragResponse::Started | DragResponse::Stalled => self.momentum.stop(),
            DragResponse::Rotated(step) => {
                self.momentum.set(step);
                self.momentum.apply_to(&mut self.angles);
            }
            DragResponse::Released | DragResponse::Ignored => {}
        }
        response
    }

    pub fn drag_start(&mut self, x: f64, y: f64) -> DragResponse {
        self.pointer_event(PointerEvent::DragStart { x, y })
    }

    pub fn drag_move(&mut self, x: f64, y: f64) -> DragResponse {
        self.pointer_event(PointerEvent::DragMove { x, y })
    }

    pub fn drag_end(&mut self) -> DragResponse {
        self.pointer_event(PointerEvent::DragEnd)
    }

    /// Advance one frame: coast on momentum unless a drag holds the cube
    pub fn tick(&mut self) {
        if !self.drag.is_dragging() {
            self.momentum.apply_to(&mut self.angles);
            self.momentum.decay();
        }
    }

    /// Back to the initial pose, at rest, with no drag in progress
    pub fn reset(&mut self) {
        self.angles = PlaneAngles::ZERO;
        self.momentum.stop();
        self.drag.reset();
    }

    /// Screen position of every vertex on a `width` × `height` surface
    pub fn project(&self, width: f64, height: f64) -> Vec<Vec2> {
        self.shape
            .vertices()
            .iter()
            .map(|&v| self.projection.to_screen(self.angles.rotate(v), width, height))
            .collect()
    }

    /// Geometry plus projected points for the current angles
    pub fn snapshot(&self, width: f64, height: f64) -> Snapshot<'_> {
        Snapshot {
            vertices: self.shape.vertices(),
            edges: self.shape.edges(),
            screen: self.project(width, height),
        }
    }

    /// Draw the current pose: background, then edges, then vertex dots
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (width, height) = surface.size();
        surface.clear(self.palette.background);

        let points = self.project(width, height);

        surface.set_stroke(self.palette.stroke, self.edge_width);
        for edge in self.shape.edges() {
            surface.line(points[edge.a], points[edge.b]);
        }

        surface.set_fill(self.palette.dot);
        for &point in &points {
            surface.filled_circle(point, self.vertex_radius);
        }
    }

    /// One full frame: [`tick`](Self::tick) then [`render`](Self::render)
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.tick();
        self.render(surface);
    }
}
