//! Constellation core - the per-page animation state
//!
//! Owns everything a frame touches: configuration, viewport, spatial grid,
//! particle field, pointer tracker, cursor trail, parallax and the renderer.
//! There is no global state; the animation driver holds one core and input
//! handlers reach it only through an `InputHandle`.
//!
//! Per tick (see `step`): pointer easing, drift + wrap, repulsion nudges,
//! grid rebuild, trail and parallax easing. Rendering is a separate call so a
//! host can step without painting.

use crate::core::math::{Rng, Vec2};
use crate::domain::config::ConstellationConfig;
use crate::domain::viewport::Viewport;
use crate::render::{ConstellationRenderer, RenderStats, Surface};
use crate::spatial::SpatialGrid;
use crate::systems::{CursorTrail, Parallax, ParticleField, PointerTracker};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_frame.rs"]
mod render_frame;
mod facade;

pub use facade::Constellation;
pub use frame_stats::FrameStats;

use perf_timer::FrameTimer;

pub struct ConstellationCore {
    config: ConstellationConfig,
    viewport: Viewport,
    grid: SpatialGrid,
    field: ParticleField,
    pointer: PointerTracker,
    trail: Option<CursorTrail>,
    parallax: Parallax,
    renderer: ConstellationRenderer,
    rng: Rng,

    frame: u64,
    stats: FrameStats,
}

impl ConstellationCore {
    /// Validate `config`, size everything for the viewport and seed the field.
    pub fn new(
        config: ConstellationConfig,
        width: f32,
        height: f32,
        dpr: f32,
        seed: u32,
    ) -> Result<Self, String> {
        init::create_core(config, width, height, dpr, seed)
    }

    /// Classic preset, seeded from entropy
    pub fn with_defaults(width: f32, height: f32, dpr: f32) -> Self {
        init::create_default_core(width, height, dpr)
    }

    pub fn config(&self) -> &ConstellationConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn trail(&self) -> Option<&CursorTrail> {
        self.trail.as_ref()
    }

    /// Eased cursor dot and ring positions; `None` when the trail is off.
    pub fn cursor_followers(&self) -> Option<(Vec2, Vec2)> {
        self.trail.as_ref().map(|t| (t.dot(), t.ring()))
    }

    pub fn particle_count(&self) -> u32 {
        self.field.len() as u32
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Snapshot of the last step/render
    pub fn stats(&self) -> FrameStats {
        self.stats.clone()
    }

    /// Parallax offset in px; zero when parallax is disabled.
    pub fn parallax_offset(&self) -> Vec2 {
        if self.config.parallax.enabled {
            self.parallax.offset(&self.config.parallax)
        } else {
            Vec2::ZERO
        }
    }

    /// Re-measure: resize the grid and reseed the field.
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        settings::resize(self, width, height, dpr);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        settings::apply_viewport(self, viewport);
    }

    /// Pointer or touch position in css px
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        settings::pointer_move(self, x, y);
    }

    pub fn pointer_leave(&mut self) {
        settings::pointer_leave(self);
    }

    /// Turn the cursor trail off, e.g. on devices without a fine pointer.
    pub fn disable_trail(&mut self) {
        settings::disable_trail(self);
    }

    /// Advance the animation by one frame.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Paint the constellation layer.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> RenderStats {
        render_frame::render(self, surface)
    }

    /// Paint the cursor trail layer. Does nothing when the trail is disabled.
    pub fn render_trail<S: Surface + ?Sized>(&mut self, surface: &mut S) -> u32 {
        render_frame::render_trail(self, surface)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
