//! Pointer tracking
//!
//! Raw pointer/touch coordinates are stored as the target; a [`Follower`]
//! eases towards it once per frame. Several followers with different easing
//! give layered trailing visuals (tight dot, loose ring, parallax).

use crate::core::math::Vec2;
use crate::domain::config::PointerSource;

/// Below this squared separation the repulsion direction is undefined.
pub const MIN_REPEL_DISTANCE_SQ: f32 = 0.001;

/// Exponential follower: `pos += (target - pos) * easing` per frame.
///
/// For easing in (0, 1) the distance to a fixed target shrinks by a constant
/// factor each step and never overshoots; easing 1 snaps.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    pos: Vec2,
    easing: f32,
}

impl Follower {
    pub fn new(start: Vec2, easing: f32) -> Self {
        Self { pos: start, easing: easing.clamp(f32::MIN_POSITIVE, 1.0) }
    }

    #[inline]
    pub fn step(&mut self, target: Vec2) {
        self.pos = self.pos.ease_towards(target, self.easing);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn snap_to(&mut self, p: Vec2) {
        self.pos = p;
    }
}

#[derive(Clone, Debug)]
pub struct PointerTracker {
    target: Vec2,
    smoothed: Follower,
    active: bool,
}

impl PointerTracker {
    pub fn new(start: Vec2, easing: f32) -> Self {
        Self {
            target: start,
            smoothed: Follower::new(start, easing),
            active: false,
        }
    }

    /// Raw pointer or touch position. Non-finite coordinates are ignored.
    pub fn on_move(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.target = Vec2::new(x, y);
        self.active = true;
    }

    /// Desktop pointer left the page. Touch input never calls this.
    pub fn on_leave(&mut self) {
        self.active = false;
    }

    pub fn tick(&mut self) {
        self.smoothed.step(self.target);
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed.position()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self, source: PointerSource) -> Vec2 {
        match source {
            PointerSource::Raw => self.target,
            PointerSource::Smoothed => self.smoothed(),
        }
    }
}

/// Displacement pushing `particle` away from `pointer`.
///
/// Linear falloff `(1 - d / distance) * force` along the separation vector;
/// `None` outside `distance` or when the two points coincide.
pub fn repulsion_nudge(particle: Vec2, pointer: Vec2, distance: f32, force: f32) -> Option<Vec2> {
    let sep = particle - pointer;
    let d2 = sep.length_squared();
    if d2 >= distance * distance || d2 <= MIN_REPEL_DISTANCE_SQ {
        return None;
    }
    let d = d2.sqrt();
    let strength = (1.0 - d / distance) * force;
    Some(sep * (strength / d))
}
