//! Animation driver
//!
//! A two-state machine around one [`ConstellationCore`]:
//!
//! ```text
//! Stopped --start()--> Running --stop()--> Stopped
//!            (reduced motion / no surface: stays Stopped)
//! ```
//!
//! Each fired frame drains pending input, steps the core, paints the
//! constellation (and the cursor trail when a second surface is attached) and
//! requests the next frame. A frame that fires after `stop()` does nothing.

use crate::domain::viewport::Viewport;
use crate::render::Surface;
use crate::simulation::ConstellationCore;

mod error;
mod input;
mod scheduler;

pub use error::DriverError;
pub use input::{InputHandle, PointerInput};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// Loop armed (or already running)
    Running,
    /// User prefers reduced motion; nothing was scheduled
    ReducedMotion,
    /// No drawing surface; nothing was scheduled
    SurfaceUnavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DriverState {
    Stopped,
    Running { frame: Option<FrameHandle> },
}

pub struct AnimationDriver<S: FrameScheduler, D: Surface> {
    core: ConstellationCore,
    scheduler: S,
    surface: Option<D>,
    cursor_surface: Option<D>,
    input: InputHandle,
    state: DriverState,
    reduced_motion: bool,
}

impl<S: FrameScheduler, D: Surface> AnimationDriver<S, D> {
    pub fn new(core: ConstellationCore, scheduler: S, surface: Option<D>) -> Self {
        Self {
            core,
            scheduler,
            surface,
            cursor_surface: None,
            input: InputHandle::new(),
            state: DriverState::Stopped,
            reduced_motion: false,
        }
    }

    /// Second surface for the cursor trail layer
    pub fn with_cursor_surface(mut self, surface: Option<D>) -> Self {
        self.cursor_surface = surface;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Handle for event listeners
    pub fn input(&self) -> InputHandle {
        self.input.clone()
    }

    pub fn core(&self) -> &ConstellationCore {
        &self.core
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Measure, reseed and arm the first frame.
    pub fn start(&mut self) -> Result<StartOutcome, DriverError> {
        if self.is_running() {
            return Ok(StartOutcome::Running);
        }
        if self.reduced_motion {
            console_log!("reduced motion preferred; constellation left idle");
            return Ok(StartOutcome::ReducedMotion);
        }
        if self.surface.is_none() {
            console_warn!("constellation: no drawing surface, animation disabled");
            return Ok(StartOutcome::SurfaceUnavailable);
        }

        let measured = self.drain_input().unwrap_or(*self.core.viewport());
        self.apply_viewport(measured);

        let handle = self.scheduler.request_frame().map_err(DriverError::Scheduler)?;
        self.state = DriverState::Running { frame: Some(handle) };
        Ok(StartOutcome::Running)
    }

    /// Cancel the pending frame and release surfaces. Safe to call repeatedly.
    pub fn stop(&mut self) {
        let prev = std::mem::replace(&mut self.state, DriverState::Stopped);
        if let DriverState::Running { frame: Some(handle) } = prev {
            self.scheduler.cancel_frame(handle);
        }
        for mut surface in [self.surface.take(), self.cursor_surface.take()].into_iter().flatten() {
            surface.release();
        }
    }

    /// Re-measure: resize grid and surfaces, reseed the field.
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) -> Result<(), DriverError> {
        if !self.is_running() {
            return Err(DriverError::NotRunning);
        }
        self.core.resize(width, height, dpr);
        self.configure_surfaces();
        Ok(())
    }

    /// Body of one scheduled frame. Returns whether another frame was armed.
    pub fn on_frame(&mut self) -> bool {
        let DriverState::Running { frame } = &mut self.state else {
            return false;
        };
        *frame = None;

        if let Some(viewport) = self.drain_input() {
            self.apply_viewport(viewport);
        }

        self.core.step();
        if let Some(surface) = self.surface.as_mut() {
            self.core.render(surface);
        }
        if let Some(surface) = self.cursor_surface.as_mut() {
            self.core.render_trail(surface);
        }

        match self.scheduler.request_frame() {
            Ok(handle) => {
                self.state = DriverState::Running { frame: Some(handle) };
                true
            }
            Err(e) => {
                console_warn!("constellation stopped: {}", DriverError::Scheduler(e));
                self.stop();
                false
            }
        }
    }

    /// Apply queued pointer input; hand back a queued viewport.
    fn drain_input(&mut self) -> Option<Viewport> {
        let drained = self.input.take();
        if let Some(p) = drained.pointer.moved {
            self.core.pointer_move(p.x, p.y);
        }
        if drained.pointer.left {
            self.core.pointer_leave();
        }
        drained.viewport
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        self.core.resize(viewport.width(), viewport.height(), viewport.dpr());
        self.configure_surfaces();
    }

    fn configure_surfaces(&mut self) {
        let viewport = *self.core.viewport();
        for surface in [self.surface.as_mut(), self.cursor_surface.as_mut()].into_iter().flatten() {
            surface.configure(&viewport);
        }
    }
}
