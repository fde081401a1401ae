//! Cursor trail - short-lived glow sparks behind the pointer
//!
//! Two followers chase the raw pointer: a tight "dot" and a lagging "ring".
//! Whenever the pointer has travelled far enough since the last spawn, a spark
//! is emitted at the dot with a speed-scaled random velocity. Sparks fade out
//! linearly and are dropped oldest-first beyond the configured cap.

use std::collections::VecDeque;

use crate::core::math::{Rng, Vec2};
use crate::domain::config::TrailConfig;

use super::pointer::Follower;

const SPAWN_JITTER_BASE: f32 = 0.4;
const SPAWN_JITTER_PER_SPEED: f32 = 0.25;
const SPARK_RADIUS_MIN: f32 = 2.2;
const SPARK_RADIUS_SPREAD: f32 = 3.6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 1 at spawn, removed at 0
    pub life: f32,
}

pub struct CursorTrail {
    sparks: VecDeque<TrailParticle>,
    dot: Follower,
    ring: Follower,
    target: Vec2,
    last_spawn: Vec2,
}

impl CursorTrail {
    pub fn new(start: Vec2, cfg: &TrailConfig) -> Self {
        Self {
            sparks: VecDeque::with_capacity(cfg.max_particles as usize + 1),
            dot: Follower::new(start, cfg.dot_easing),
            ring: Follower::new(start, cfg.ring_easing),
            target: start,
            last_spawn: start,
        }
    }

    pub fn set_target(&mut self, p: Vec2) {
        self.target = p;
    }

    pub fn tick(&mut self, cfg: &TrailConfig, rng: &mut Rng) {
        self.dot.step(self.target);
        self.ring.step(self.target);

        let travelled = (self.target - self.last_spawn).length();
        if travelled > cfg.spawn_distance {
            self.spawn(travelled.min(cfg.max_speed), cfg, rng);
            self.last_spawn = self.target;
        }

        for s in self.sparks.iter_mut() {
            s.pos += s.vel;
            s.life -= cfg.decay;
        }
        self.sparks.retain(|s| s.life > 0.0);
    }

    fn spawn(&mut self, speed: f32, cfg: &TrailConfig, rng: &mut Rng) {
        let jitter = SPAWN_JITTER_BASE + speed * SPAWN_JITTER_PER_SPEED;
        self.sparks.push_back(TrailParticle {
            pos: self.dot.position(),
            vel: Vec2::new((rng.next_f32() - 0.5) * jitter, (rng.next_f32() - 0.5) * jitter),
            radius: SPARK_RADIUS_MIN + rng.next_f32() * SPARK_RADIUS_SPREAD,
            life: 1.0,
        });
        while self.sparks.len() > cfg.max_particles as usize {
            self.sparks.pop_front();
        }
    }

    pub fn sparks(&self) -> impl Iterator<Item = &TrailParticle> + '_ {
        self.sparks.iter()
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty()
    }

    pub fn dot(&self) -> Vec2 {
        self.dot.position()
    }

    pub fn ring(&self) -> Vec2 {
        self.ring.position()
    }
}
