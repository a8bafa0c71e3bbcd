//! Display-loop scheduling on top of winit redraw requests

use std::sync::Arc;
use winit::window::Window;

use hyperview_core::{FrameHandle, FrameScheduler};

/// [`FrameScheduler`] that asks the window for a redraw
///
/// winit has no way to withdraw a redraw request, so a cancelled frame may
/// still arrive as `RedrawRequested`. [`hyperview_core::Session`] drops frames
/// it has no pending handle for, which makes that delivery a no-op.
pub struct RedrawScheduler {
    window: Option<Arc<Window>>,
    next: u64,
    cancelled: Option<FrameHandle>,
}

impl RedrawScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window: Some(window),
            next: 0,
            cancelled: None,
        }
    }

    /// Scheduler with no window; requests only hand out handles
    pub fn detached() -> Self {
        Self {
            window: None,
            next: 0,
            cancelled: None,
        }
    }

    /// Most recently cancelled frame
    pub fn last_cancelled(&self) -> Option<FrameHandle> {
        self.cancelled
    }
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        if let Some(window) = &self.window {
            window.request_redraw();
        }
        FrameHandle(self.next)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        log::debug!("Cancelling frame {:?}", handle);
        self.cancelled = Some(handle);
    }
}
