mod vec2;
pub mod random;

pub use random::Rng;
pub use vec2::Vec2;
