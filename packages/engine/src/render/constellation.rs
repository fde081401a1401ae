//! Constellation frame
//!
//! Paint order matters for layering under additive blending:
//! clear, links, pointer links, particles (halo then core), pointer glyph.
//! Threshold tests use squared distances; a square root is taken only for
//! pairs that are actually drawn, to get the linear falloff ratio.

use crate::core::math::Vec2;
use crate::domain::color::{mix, Rgba};
use crate::domain::config::ConstellationConfig;
use crate::domain::viewport::Viewport;
use crate::spatial::SpatialGrid;
use crate::systems::{ParticleField, PointerTracker};

use super::{BlendMode, GlowStop, Surface};

/// Link colour blend at zero strength (far end of the range)
const LINK_MIX_FLOOR: f32 = 0.25;

// Halo gradient alphas: center, inner ring, outer ring
const HALO_CENTER_ALPHA: f32 = 0.95;
const HALO_INNER: (f32, f32) = (0.28, 0.24);
const HALO_OUTER: (f32, f32) = (0.6, 0.10);

/// `1 - d / distance` for `d < distance`, else `None` (the boundary is exclusive).
#[inline]
pub fn link_falloff(d2: f32, distance: f32) -> Option<f32> {
    if distance <= 0.0 || d2 >= distance * distance {
        return None;
    }
    Some(1.0 - d2.sqrt() / distance)
}

/// Line opacity for a pair at squared distance `d2`: linear falloff scaled by
/// `strength`, clamped to `[0, cap]`.
#[inline]
pub fn link_opacity(d2: f32, distance: f32, strength: f32, cap: f32) -> f32 {
    link_falloff(d2, distance)
        .map(|t| (strength * t).clamp(0.0, cap.max(0.0)))
        .unwrap_or(0.0)
}

/// Everything a frame reads; the renderer never mutates simulation state.
pub struct Scene<'a> {
    pub viewport: &'a Viewport,
    pub field: &'a ParticleField,
    pub grid: &'a SpatialGrid,
    pub pointer: &'a PointerTracker,
    pub config: &'a ConstellationConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub links: u32,
    pub pointer_links: u32,
}

#[derive(Default)]
pub struct ConstellationRenderer {
    // (particle index, squared distance to pointer); reused across frames
    nearest: Vec<(usize, f32)>,
}

impl ConstellationRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, scene: &Scene<'_>) -> RenderStats {
        let mut stats = RenderStats::default();

        surface.clear(scene.viewport.width(), scene.viewport.height());
        surface.set_blend(BlendMode::Lighter);

        stats.links = draw_links(surface, scene);
        if scene.pointer.is_active() {
            stats.pointer_links = self.draw_pointer_links(surface, scene);
        }
        draw_particles(surface, scene);
        if scene.pointer.is_active() && scene.config.pointer.glyph {
            draw_pointer_glyph(surface, scene);
        }

        surface.set_blend(BlendMode::SourceOver);
        stats
    }

    fn draw_pointer_links<S: Surface + ?Sized>(&mut self, surface: &mut S, scene: &Scene<'_>) -> u32 {
        let cfg = &scene.config.pointer;
        if cfg.link_count == 0 || cfg.link_distance <= 0.0 {
            return 0;
        }
        let pointer = scene.pointer.smoothed();
        let max_d2 = cfg.link_distance * cfg.link_distance;

        self.nearest.clear();
        for (i, p) in scene.field.particles().iter().enumerate() {
            let d2 = p.position().distance_squared(pointer);
            if d2 < max_d2 {
                self.nearest.push((i, d2));
            }
        }
        self.nearest.sort_unstable_by(|a, b| a.1.total_cmp(&b.1));
        self.nearest.truncate(cfg.link_count as usize);

        let particles = scene.field.particles();
        let mut drawn = 0;
        for &(i, d2) in self.nearest.iter() {
            let Some(t) = link_falloff(d2, cfg.link_distance) else {
                continue;
            };
            let alpha = (cfg.link_strength * t).clamp(0.0, cfg.link_strength);
            surface.line(
                pointer,
                particles[i].position(),
                Rgba::new(scene.config.palette.pointer, alpha),
                scene.config.links.line_width,
            );
            drawn += 1;
        }
        drawn
    }
}

fn draw_links<S: Surface + ?Sized>(surface: &mut S, scene: &Scene<'_>) -> u32 {
    let links = &scene.config.links;
    let palette = &scene.config.palette;
    let particles = scene.field.particles();
    let mut drawn = 0;

    for (i, p) in particles.iter().enumerate() {
        let a = p.position();
        let mut from_here = 0;
        for j in scene.grid.neighbors_of(a) {
            // each unordered pair once
            if j <= i {
                continue;
            }
            let b = particles[j].position();
            let Some(t) = link_falloff(a.distance_squared(b), links.distance) else {
                continue;
            };
            let alpha = (links.strength * t).clamp(0.0, links.max_opacity);
            let rgb = if links.mix_colors {
                mix(palette.line_a, palette.line_b, LINK_MIX_FLOOR + (1.0 - LINK_MIX_FLOOR) * t)
            } else {
                palette.line_a
            };
            surface.line(a, b, Rgba::new(rgb, alpha), links.line_width);
            drawn += 1;

            from_here += 1;
            if links.max_per_particle > 0 && from_here >= links.max_per_particle {
                break;
            }
        }
    }
    drawn
}

fn draw_particles<S: Surface + ?Sized>(surface: &mut S, scene: &Scene<'_>) {
    let style = &scene.config.particles;
    let palette = &scene.config.palette;
    let proximity = scene.config.pointer.proximity_distance;
    let check_near = scene.pointer.is_active() && proximity > 0.0;
    let pointer = scene.pointer.smoothed();

    let halo = [
        GlowStop::new(0.0, Rgba::new(palette.dot, HALO_CENTER_ALPHA)),
        GlowStop::new(HALO_INNER.0, Rgba::new(palette.line_a, HALO_INNER.1)),
        GlowStop::new(HALO_OUTER.0, Rgba::new(palette.line_b, HALO_OUTER.1)),
        GlowStop::new(1.0, Rgba::TRANSPARENT),
    ];

    for p in scene.field.particles() {
        let pos = p.position();
        if style.halo_scale > 0.0 {
            surface.glow(pos, p.radius * style.halo_scale, &halo);
        }
        let near = check_near && pos.distance_squared(pointer) < proximity * proximity;
        let alpha = if near { style.near_alpha } else { style.core_alpha };
        surface.circle(pos, p.radius, Rgba::new(palette.dot, alpha));
    }
}

fn draw_pointer_glyph<S: Surface + ?Sized>(surface: &mut S, scene: &Scene<'_>) {
    let cfg = &scene.config.pointer;
    let color = scene.config.palette.pointer;
    let at: Vec2 = scene.pointer.smoothed();
    surface.glow(
        at,
        cfg.glow_radius,
        &[
            GlowStop::new(0.0, Rgba::new(color, cfg.glow_alpha)),
            GlowStop::new(1.0, Rgba::TRANSPARENT),
        ],
    );
    surface.circle(at, cfg.glyph_radius, Rgba::new(color, cfg.glyph_alpha));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, DrawList};
    use crate::systems::Particle;

    fn still(x: f32, y: f32) -> Particle {
        Particle { pos: Vec2::new(x, y), vel: Vec2::ZERO, radius: 1.5, nudge: Vec2::ZERO }
    }

    struct Fixture {
        viewport: Viewport,
        field: ParticleField,
        grid: SpatialGrid,
        pointer: PointerTracker,
        config: ConstellationConfig,
    }

    impl Fixture {
        fn new(config: ConstellationConfig, points: &[(f32, f32)]) -> Self {
            let viewport = Viewport::new(800.0, 600.0, 1.0);
            let mut field = ParticleField::new();
            field.particles_mut().extend(points.iter().map(|&(x, y)| still(x, y)));
            let mut grid = SpatialGrid::new(config.links.cell_size);
            grid.rebuild(&viewport, field.positions());
            let pointer = PointerTracker::new(viewport.center(), config.pointer.easing);
            Self { viewport, field, grid, pointer, config }
        }

        fn render(&self) -> (DrawList, RenderStats) {
            let mut list = DrawList::new();
            let scene = Scene {
                viewport: &self.viewport,
                field: &self.field,
                grid: &self.grid,
                pointer: &self.pointer,
                config: &self.config,
            };
            let stats = ConstellationRenderer::new().render(&mut list, &scene);
            (list, stats)
        }
    }

    #[test]
    fn opacity_is_zero_at_link_distance_and_half_at_midpoint() {
        let l = 128.0_f32;
        assert_eq!(link_opacity(l * l, l, 0.22, 0.22), 0.0);
        assert_eq!(link_opacity(l * l + 1.0, l, 0.22, 0.22), 0.0);
        let half = 0.5 * l;
        assert_eq!(link_opacity(half * half, l, 0.22, 0.22), 0.22 / 2.0);
        assert_eq!(link_opacity(0.0, l, 0.22, 0.22), 0.22);
        // cap applies above strength
        assert_eq!(link_opacity(0.0, l, 0.5, 0.2), 0.2);
    }

    #[test]
    fn frame_is_cleared_and_blend_restored() {
        let fx = Fixture::new(ConstellationConfig::drift(), &[(100.0, 100.0)]);
        let (list, _) = fx.render();
        let cmds = list.commands();
        assert_eq!(cmds[0], DrawCommand::Clear { width: 800.0, height: 600.0 });
        assert_eq!(cmds[1], DrawCommand::Blend(BlendMode::Lighter));
        assert_eq!(cmds.last(), Some(&DrawCommand::Blend(BlendMode::SourceOver)));
    }

    #[test]
    fn each_pair_is_linked_once_and_boundary_is_exclusive() {
        // a-b at 64px, b-c at exactly 128px, a-c at 192px
        let fx = Fixture::new(
            ConstellationConfig::drift(),
            &[(100.0, 100.0), (164.0, 100.0), (292.0, 100.0)],
        );
        let (list, stats) = fx.render();
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(stats.links, 1);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Vec2::new(100.0, 100.0));
        assert_eq!(lines[0].1, Vec2::new(164.0, 100.0));
        assert_eq!(lines[0].2.a, 0.11);
        assert_eq!(lines[0].2.r, 150);
    }

    #[test]
    fn per_particle_link_cap_bounds_draw_calls() {
        let cluster: Vec<(f32, f32)> = (0..8).map(|i| (300.0 + i as f32, 300.0)).collect();
        let fx = Fixture::new(ConstellationConfig::classic(), &cluster);
        let (_, stats) = fx.render();
        // 8 particles; source i can link to at most min(3, 7 - i) partners
        assert_eq!(stats.links, 3 * 5 + 2 + 1);

        let fx = Fixture::new(ConstellationConfig::drift(), &cluster);
        let (_, stats) = fx.render();
        assert_eq!(stats.links, 8 * 7 / 2);
    }

    #[test]
    fn pointer_links_pick_nearest_within_range() {
        let mut points: Vec<(f32, f32)> = (0..10).map(|i| (400.0 + 10.0 * i as f32, 300.0)).collect();
        points.push((400.0, 550.0)); // out of pointer range
        let mut fx = Fixture::new(ConstellationConfig::classic(), &points);
        let (_, stats) = fx.render();
        assert_eq!(stats.pointer_links, 0, "inactive pointer draws nothing");

        fx.pointer.on_move(400.0, 300.0);
        fx.pointer.tick();
        let (list, stats) = fx.render();
        assert_eq!(stats.pointer_links, 7);

        let pointer_color = fx.config.palette.pointer;
        let targets: Vec<Vec2> = list
            .lines()
            .filter(|(from, _, c)| *from == Vec2::new(400.0, 300.0) && [c.r, c.g, c.b] == pointer_color)
            .map(|(_, to, _)| to)
            .collect();
        // Nearest first; the particle under the pointer is at full strength.
        assert_eq!(targets.len(), 7);
        assert_eq!(targets[0], Vec2::new(400.0, 300.0));
        assert_eq!(targets[6], Vec2::new(460.0, 300.0));
    }

    #[test]
    fn particles_brighten_near_pointer_and_glyph_follows_config() {
        let mut fx = Fixture::new(ConstellationConfig::drift(), &[(100.0, 100.0), (790.0, 590.0)]);
        fx.pointer.on_move(100.0, 100.0);
        for _ in 0..400 {
            fx.pointer.tick();
        }
        let (list, _) = fx.render();
        let alphas: Vec<f32> = list.circles().map(|(_, _, c)| c.a).collect();
        assert_eq!(alphas, vec![0.78, 0.55]);
        assert_eq!(list.glow_count(), 0, "drift draws no halos or glyph");

        let mut fx = Fixture::new(ConstellationConfig::classic(), &[(100.0, 100.0)]);
        let (list, _) = fx.render();
        assert_eq!(list.glow_count(), 1, "halo only while the pointer is inactive");
        fx.pointer.on_move(50.0, 50.0);
        fx.pointer.tick();
        let (list, _) = fx.render();
        assert_eq!(list.glow_count(), 2);
        let last_circle = list.circles().last().unwrap();
        assert_eq!(last_circle.0, Vec2::new(50.0, 50.0));
        assert_eq!(last_circle.1, 2.4);
    }
}
