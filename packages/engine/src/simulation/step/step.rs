use super::{ConstellationCore, FrameTimer};

pub(super) fn step(core: &mut ConstellationCore) {
    let t0 = FrameTimer::start();

    // Pointer first so repulsion and rendering see this frame's eased position.
    core.pointer.tick();

    // Drift + wrap; also clears last frame's nudges.
    core.field.advance(&core.viewport, core.config.field.wrap_margin);

    let pointer_cfg = &core.config.pointer;
    core.stats.nudged = if core.pointer.is_active() && pointer_cfg.repel_distance > 0.0 {
        let at = core.pointer.position(pointer_cfg.repel_source);
        core.field
            .apply_repulsion(at, pointer_cfg.repel_distance, pointer_cfg.repel_force)
    } else {
        0
    };

    // Buckets follow drawn positions (pos + nudge).
    core.grid.rebuild(&core.viewport, core.field.positions());

    if let Some(trail) = core.trail.as_mut() {
        trail.tick(&core.config.trail, &mut core.rng);
        core.stats.trail_particles = trail.len() as u32;
    }
    if core.config.parallax.enabled {
        core.parallax.tick();
    }

    core.frame += 1;
    core.stats.frame = core.frame;
    core.stats.particle_count = core.field.len() as u32;
    core.stats.step_ms = t0.elapsed_ms();
}
