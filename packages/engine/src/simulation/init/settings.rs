use crate::core::math::Vec2;
use crate::domain::viewport::Viewport;

use super::ConstellationCore;

pub(super) fn resize(core: &mut ConstellationCore, width: f32, height: f32, dpr: f32) {
    let viewport =
        Viewport::with_dpr_cap(width, height, dpr, core.config.max_device_pixel_ratio);
    apply_viewport(core, viewport);
}

/// No particle survives a resize: the field is reseeded for the new area.
pub(super) fn apply_viewport(core: &mut ConstellationCore, viewport: Viewport) {
    core.viewport = viewport;
    core.grid.configure(&viewport);
    core.field.seed(&viewport, &core.config.field, &mut core.rng);
    core.grid.rebuild(&viewport, core.field.positions());

    core.stats.particle_count = core.field.len() as u32;
    core.stats.grid_cols = core.grid.cols() as u32;
    core.stats.grid_rows = core.grid.rows() as u32;
}

pub(super) fn pointer_move(core: &mut ConstellationCore, x: f32, y: f32) {
    if !x.is_finite() || !y.is_finite() {
        return;
    }
    let p = Vec2::new(x, y);
    core.pointer.on_move(x, y);
    core.parallax.set_pointer(p, &core.viewport);
    if let Some(trail) = core.trail.as_mut() {
        trail.set_target(p);
    }
}

pub(super) fn pointer_leave(core: &mut ConstellationCore) {
    core.pointer.on_leave();
}

pub(super) fn disable_trail(core: &mut ConstellationCore) {
    core.trail = None;
    core.stats.trail_particles = 0;
}
