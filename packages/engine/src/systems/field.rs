//! Particle field - ambient drift with toroidal wrap
//!
//! Particles integrate a constant velocity and wrap around the viewport once
//! they are more than `wrap_margin` past an edge. No friction and no collision:
//! the drift never loses energy. Pointer repulsion is kept apart from the
//! integrated state as a per-frame `nudge` (see [`ParticleField::apply_repulsion`]).

use crate::core::math::{Rng, Vec2};
use crate::domain::config::FieldConfig;
use crate::domain::viewport::Viewport;

use super::pointer::repulsion_nudge;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Integrated position (px)
    pub pos: Vec2,
    /// px/frame
    pub vel: Vec2,
    pub radius: f32,
    /// Repulsion displacement for the current frame only
    pub nudge: Vec2,
}

impl Particle {
    /// Where the particle is drawn and bucketed this frame
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos + self.nudge
    }
}

/// `clamp(floor(area / area_per_particle), min, max)`
pub fn particle_count_for(viewport: &Viewport, cfg: &FieldConfig) -> usize {
    let raw = (viewport.area() / cfg.area_per_particle).floor();
    let raw = if raw.is_finite() && raw > 0.0 {
        raw.min(u32::MAX as f32) as u32
    } else {
        0
    };
    raw.clamp(cfg.min_particles, cfg.max_particles) as usize
}

#[derive(Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every particle with a fresh random set sized for `viewport`.
    pub fn seed(&mut self, viewport: &Viewport, cfg: &FieldConfig, rng: &mut Rng) {
        let count = particle_count_for(viewport, cfg);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                pos: Vec2::new(
                    rng.range(0.0, viewport.width()),
                    rng.range(0.0, viewport.height()),
                ),
                vel: Vec2::new(rng.range(-cfg.speed, cfg.speed), rng.range(-cfg.speed, cfg.speed)),
                radius: rng.range(cfg.radius_min, cfg.radius_max),
                nudge: Vec2::ZERO,
            });
        }
    }

    /// One frame of drift. Also drops last frame's repulsion nudges.
    pub fn advance(&mut self, viewport: &Viewport, margin: f32) {
        let (w, h) = (viewport.width(), viewport.height());
        for p in self.particles.iter_mut() {
            p.nudge = Vec2::ZERO;
            p.pos += p.vel;
            p.pos.x = wrap_axis(p.pos.x, w, margin);
            p.pos.y = wrap_axis(p.pos.y, h, margin);
        }
    }

    /// Push particles within `distance` of `pointer` outward.
    ///
    /// Writes `nudge` from scratch; velocity and integrated position are left
    /// alone, so a resting pointer cannot pump particles away over time.
    /// Returns how many particles were nudged.
    pub fn apply_repulsion(&mut self, pointer: Vec2, distance: f32, force: f32) -> u32 {
        if distance <= 0.0 || force == 0.0 {
            return 0;
        }
        let mut nudged = 0;
        for p in self.particles.iter_mut() {
            match repulsion_nudge(p.pos, pointer, distance, force) {
                Some(n) => {
                    p.nudge = n;
                    nudged += 1;
                }
                None => p.nudge = Vec2::ZERO,
            }
        }
        nudged
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.particles.iter().map(Particle::position)
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

#[inline]
fn wrap_axis(v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}
