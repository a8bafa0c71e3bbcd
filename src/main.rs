//! Hypercube - interactive 4D hypercube viewer
//!
//! Drag to turn the tesseract through the XW, YW and ZW planes; release to
//! let it coast.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use hyperview::config::AppConfig;
use hyperview::input::{InputAction, InputMapper};
use hyperview::systems::{FrameError, RedrawScheduler, RenderSystem, WindowSystem};
use hyperview_core::{HypercubeVisualizer, PointerEvent, Session};
use hyperview_input::PointerTracker;
use hyperview_math::Vec2;

/// Everything that exists only while the window does
struct Viewer {
    window: WindowSystem,
    render: RenderSystem,
    session: Session<RedrawScheduler>,
}

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    viewer: Option<Viewer>,
    pointer: PointerTracker,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let (width, height) = config.view.canvas_size();
        Self {
            config,
            viewer: None,
            pointer: PointerTracker::with_canvas(width, height),
        }
    }

    fn create_viewer(&self, event_loop: &ActiveEventLoop) -> Result<Viewer, Box<dyn std::error::Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let render = RenderSystem::new(
            window.window().clone(),
            self.config.view.canvas_size(),
            self.config.window.vsync,
        )?;

        let scheme = self.config.theme.preference.resolve(window.prefers_dark());
        log::info!("Using {:?} color scheme", scheme);

        let visualizer = HypercubeVisualizer::new(self.config.view.to_visualizer_settings(), scheme);
        let mut session = Session::new(visualizer, RedrawScheduler::new(window.window().clone()));
        session.start();

        Ok(Viewer {
            window,
            render,
            session,
        })
    }

    /// Send a pointer event to the session and keep the cursor icon in sync
    fn dispatch(&mut self, event: Option<PointerEvent>) {
        let (Some(event), Some(viewer)) = (event, &mut self.viewer) else {
            return;
        };
        if let Some(response) = viewer.session.on_pointer(event) {
            log::trace!("{:?} -> {:?}", event, response);
            let dragging = viewer.session.visualizer().is_dragging();
            viewer.window.set_dragging(dragging);
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(viewer) = &mut self.viewer {
            viewer.session.stop();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.viewer.is_some() {
            return;
        }
        match self.create_viewer(event_loop) {
            Ok(viewer) => self.viewer = Some(viewer),
            Err(e) => {
                log::error!("Failed to start: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(viewer) = &mut self.viewer {
                    viewer.render.resize(physical_size.width, physical_size.height);
                    viewer.window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                match InputMapper::map_keyboard(key, event.state) {
                    Some(InputAction::Exit) => self.shutdown(event_loop),
                    Some(InputAction::ResetView) => {
                        if let Some(viewer) = &mut self.viewer {
                            viewer.session.visualizer_mut().reset();
                            viewer.window.set_dragging(false);
                            log::info!("View reset to initial pose");
                        }
                    }
                    Some(InputAction::ToggleFullscreen) => {
                        if let Some(viewer) = &self.viewer {
                            viewer.window.toggle_fullscreen();
                        }
                    }
                    None => {}
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let Some(viewer) = &self.viewer else {
                    return;
                };
                let pos = viewer.render.to_canvas(Vec2::new(position.x, position.y));
                let event = self.pointer.cursor_moved(pos);
                self.dispatch(event);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.pointer.mouse_input(button, state);
                self.dispatch(event);
            }

            WindowEvent::Focused(false) => {
                let event = self.pointer.focus_lost();
                self.dispatch(event);
            }

            WindowEvent::RedrawRequested => {
                let Some(viewer) = &mut self.viewer else {
                    return;
                };
                match viewer.render.render_frame(&mut viewer.session) {
                    Ok(true) => {
                        if self.config.debug.show_angles {
                            viewer.window.update_title(&viewer.session.visualizer().angles());
                        }
                    }
                    Ok(false) => {}
                    Err(FrameError::SurfaceLost) => {
                        viewer.render.reconfigure();
                        viewer.window.request_redraw();
                    }
                    Err(FrameError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                        self.shutdown(event_loop);
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        viewer.window.request_redraw();
                    }
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(viewer) = &mut self.viewer {
            viewer.session.stop();
        }
    }
}

fn main() -> Result<(), winit::error::EventLoopError> {
    // Config picks the log level, so load it before the logger exists
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting Hypercube");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)
}
