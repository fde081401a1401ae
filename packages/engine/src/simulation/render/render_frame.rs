use crate::render::{render_trail as paint_trail, RenderStats, Scene, Surface};

use super::{ConstellationCore, FrameTimer};

pub(super) fn render<S: Surface + ?Sized>(core: &mut ConstellationCore, surface: &mut S) -> RenderStats {
    let t0 = FrameTimer::start();
    let scene = Scene {
        viewport: &core.viewport,
        field: &core.field,
        grid: &core.grid,
        pointer: &core.pointer,
        config: &core.config,
    };
    let stats = core.renderer.render(surface, &scene);

    core.stats.links_drawn = stats.links;
    core.stats.pointer_links = stats.pointer_links;
    core.stats.render_ms = t0.elapsed_ms();
    stats
}

pub(super) fn render_trail<S: Surface + ?Sized>(core: &mut ConstellationCore, surface: &mut S) -> u32 {
    let Some(trail) = core.trail.as_ref() else {
        return 0;
    };
    paint_trail(surface, trail, &core.viewport, &core.config.palette, &core.config.trail)
}
