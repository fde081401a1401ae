//! Write-only input channel from event listeners to the animation loop.
//!
//! Listeners never touch the core directly; they overwrite the latest pointer
//! position and the latest viewport here, and the driver drains both at the
//! start of the next frame. A leave is kept beside the position, not in place
//! of it, so a move followed by a leave in one frame still lands the target.

use std::cell::Cell;
use std::rc::Rc;

use crate::core::math::Vec2;
use crate::domain::viewport::Viewport;

/// Pointer events collected since the last frame.
/// Apply `moved` first, then `left`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    pub moved: Option<Vec2>,
    pub left: bool,
}

impl PointerInput {
    pub fn is_empty(&self) -> bool {
        self.moved.is_none() && !self.left
    }
}

#[derive(Default)]
struct Pending {
    pointer: Cell<PointerInput>,
    viewport: Cell<Option<Viewport>>,
}

/// Cheap to clone; every clone feeds the same driver.
#[derive(Clone, Default)]
pub struct InputHandle {
    pending: Rc<Pending>,
}

pub(crate) struct DrainedInput {
    pub(crate) pointer: PointerInput,
    pub(crate) viewport: Option<Viewport>,
}

impl InputHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer or touch position in css px
    pub fn move_to(&self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            // A later move re-enters; it cancels an earlier leave.
            self.pending.pointer.set(PointerInput { moved: Some(Vec2::new(x, y)), left: false });
        }
    }

    /// Keeps any queued position.
    pub fn leave(&self) {
        let mut pointer = self.pending.pointer.get();
        pointer.left = true;
        self.pending.pointer.set(pointer);
    }

    /// Raw window metrics; the dpr cap is applied by the driver.
    pub fn resize(&self, width: f32, height: f32, dpr: f32) {
        self.pending.viewport.set(Some(Viewport::with_dpr_cap(width, height, dpr, f32::INFINITY)));
    }

    pub(crate) fn take(&self) -> DrainedInput {
        DrainedInput {
            pointer: self.pending.pointer.take(),
            viewport: self.pending.viewport.take(),
        }
    }
}
