//! Rendering
//!
//! Renderers paint through the [`Surface`] trait, so the whole frame pipeline
//! runs natively against a recording [`DrawList`] and in the browser against
//! a [`CanvasSurface`]. Coordinates are css pixels; surfaces handle dpr.

use crate::core::math::Vec2;
use crate::domain::color::Rgba;
use crate::domain::viewport::Viewport;

mod canvas;
mod constellation;
mod cursor;
mod draw_list;

pub use canvas::CanvasSurface;
pub use constellation::{link_falloff, link_opacity, ConstellationRenderer, RenderStats, Scene};
pub use cursor::render_trail;
pub use draw_list::{DrawCommand, DrawList};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Normal alpha compositing
    SourceOver,
    /// Additive, for glow accumulation
    Lighter,
}

impl BlendMode {
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Lighter => "lighter",
        }
    }
}

/// Radial gradient stop; `offset` in [0, 1] from center to edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GlowStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// A 2D drawing target
pub trait Surface {
    /// Size the backing store for `viewport` and scale so drawing is in css px.
    fn configure(&mut self, viewport: &Viewport);

    /// Clear to transparent.
    fn clear(&mut self, width: f32, height: f32);

    fn set_blend(&mut self, mode: BlendMode);

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Filled circle with a radial gradient.
    fn glow(&mut self, center: Vec2, radius: f32, stops: &[GlowStop]);

    /// Last call before the surface is dropped.
    fn release(&mut self) {}
}
