use crate::core::math::Rng;
use crate::domain::config::ConstellationConfig;
use crate::domain::viewport::Viewport;
use crate::render::ConstellationRenderer;
use crate::spatial::SpatialGrid;
use crate::systems::{CursorTrail, Parallax, ParticleField, PointerTracker};

use super::frame_stats::FrameStats;
use super::{settings, ConstellationCore};

pub(super) fn create_core(
    config: ConstellationConfig,
    width: f32,
    height: f32,
    dpr: f32,
    seed: u32,
) -> Result<ConstellationCore, String> {
    config.validate()?;
    let viewport = Viewport::with_dpr_cap(width, height, dpr, config.max_device_pixel_ratio);
    Ok(assemble(config, viewport, Rng::new(seed)))
}

pub(super) fn create_default_core(width: f32, height: f32, dpr: f32) -> ConstellationCore {
    let config = ConstellationConfig::default();
    let viewport = Viewport::with_dpr_cap(width, height, dpr, config.max_device_pixel_ratio);
    assemble(config, viewport, Rng::from_entropy())
}

fn assemble(config: ConstellationConfig, viewport: Viewport, rng: Rng) -> ConstellationCore {
    let start = viewport.center();
    let trail = config
        .trail
        .enabled
        .then(|| CursorTrail::new(start, &config.trail));

    let mut core = ConstellationCore {
        grid: SpatialGrid::new(config.links.cell_size),
        field: ParticleField::new(),
        pointer: PointerTracker::new(start, config.pointer.easing),
        trail,
        parallax: Parallax::new(&config.parallax),
        renderer: ConstellationRenderer::new(),
        rng,
        viewport,
        config,
        frame: 0,
        stats: FrameStats::default(),
    };
    settings::apply_viewport(&mut core, viewport);
    core
}
