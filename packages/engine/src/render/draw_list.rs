//! Recording surface. Lets tests and non-canvas hosts inspect a frame as data.

use super::{BlendMode, GlowStop, Surface};
use crate::core::math::Vec2;
use crate::domain::color::Rgba;
use crate::domain::viewport::Viewport;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Configure { width: u32, height: u32, dpr: f32 },
    Clear { width: f32, height: f32 },
    Blend(BlendMode),
    Line { from: Vec2, to: Vec2, color: Rgba, width: f32 },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Glow { center: Vec2, radius: f32, stops: Vec<GlowStop> },
    Release,
}

#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line { from, to, color, .. } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Circle { center, radius, color } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn glow_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Glow { .. }))
            .count()
    }
}

impl Surface for DrawList {
    fn configure(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.backing_size();
        self.commands.push(DrawCommand::Configure { width, height, dpr: viewport.dpr() });
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.commands.push(DrawCommand::Blend(mode));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn glow(&mut self, center: Vec2, radius: f32, stops: &[GlowStop]) {
        self.commands.push(DrawCommand::Glow { center, radius, stops: stops.to_vec() });
    }

    fn release(&mut self) {
        self.commands.push(DrawCommand::Release);
    }
}
