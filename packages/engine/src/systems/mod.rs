//! Per-frame systems: particle drift, pointer tracking, cursor trail, parallax.

pub mod field;
pub mod parallax;
pub mod pointer;
pub mod trail;

pub use field::{Particle, ParticleField};
pub use parallax::Parallax;
pub use pointer::{Follower, PointerTracker};
pub use trail::{CursorTrail, TrailParticle};
