//! Frame scheduling and teardown around a visualizer
//!
//! The host owns the display loop. A [`Session`] asks it for one frame at a
//! time through [`FrameScheduler`], runs exactly one tick per delivered frame,
//! and asks for the next. Stopping cancels the pending frame first and only
//! then detaches pointer input, so no callback can land on a torn-down view.

use hyperview_input::{DragResponse, PointerEvent};

use crate::{HypercubeVisualizer, Surface};

/// Identifies one requested frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host display loop: request-next-frame / cancel-frame
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A running visualizer attached to a host scheduler
pub struct Session<S: FrameScheduler> {
    visualizer: HypercubeVisualizer,
    scheduler: S,
    pending: Option<FrameHandle>,
    listening: bool,
    frames: u64,
}

impl<S: FrameScheduler> Session<S> {
    pub fn new(visualizer: HypercubeVisualizer, scheduler: S) -> Self {
        Self {
            visualizer,
            scheduler,
            pending: None,
            listening: false,
            frames: 0,
        }
    }

    /// Attach pointer input and request the first frame
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.listening = true;
        self.pending = Some(self.scheduler.request_frame());
        log::info!("Visualizer session started");
    }

    /// Check if a frame is scheduled or input is attached
    pub fn is_running(&self) -> bool {
        self.pending.is_some() || self.listening
    }

    /// Check if pointer events are being accepted
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Handle of the frame currently requested, if any
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The host delivered a frame: tick, render, schedule the next one
    ///
    /// Returns false (and draws nothing) if no frame was pending.
    pub fn on_frame<T: Surface + ?Sized>(&mut self, surface: &mut T) -> bool {
        if self.pending.take().is_none() {
            log::debug!("Frame delivered with none pending; skipping");
            return false;
        }

        self.visualizer.frame(surface);
        self.frames += 1;
        self.pending = Some(self.scheduler.request_frame());
        true
    }

    /// Route a pointer event to the visualizer while input is attached
    pub fn on_pointer(&mut self, event: PointerEvent) -> Option<DragResponse> {
        if !self.listening {
            log::debug!("Pointer event {:?} after teardown; ignoring", event);
            return None;
        }
        Some(self.visualizer.pointer_event(event))
    }

    /// Cancel the pending frame, then detach pointer input
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.listening {
            self.listening = false;
            log::info!("Visualizer session stopped after {} frames", self.frames);
        }
    }

    pub fn visualizer(&self) -> &HypercubeVisualizer {
        &self.visualizer
    }

    pub fn visualizer_mut(&mut self) -> &mut HypercubeVisualizer {
        &mut self.visualizer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
