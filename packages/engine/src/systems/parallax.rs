//! Pointer parallax: an eased, viewport-normalized pointer offset.

use crate::core::math::Vec2;
use crate::domain::config::ParallaxConfig;
use crate::domain::viewport::Viewport;

use super::pointer::Follower;

pub struct Parallax {
    normalized: Vec2,
    eased: Follower,
}

impl Parallax {
    pub fn new(cfg: &ParallaxConfig) -> Self {
        Self {
            normalized: Vec2::ZERO,
            eased: Follower::new(Vec2::ZERO, cfg.easing),
        }
    }

    /// Pointer in css px; stored as (-0.5..0.5, -0.5..0.5) around the center.
    pub fn set_pointer(&mut self, p: Vec2, viewport: &Viewport) {
        if viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            return;
        }
        self.normalized = Vec2::new(
            p.x / viewport.width() - 0.5,
            p.y / viewport.height() - 0.5,
        );
    }

    pub fn tick(&mut self) {
        self.eased.step(self.normalized);
    }

    /// Offset in px
    pub fn offset(&self, cfg: &ParallaxConfig) -> Vec2 {
        let eased = self.eased.position();
        Vec2::new(eased.x * cfg.amplitude[0], eased.y * cfg.amplitude[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ConstellationConfig;

    #[test]
    fn starts_centered_and_eases_towards_corner() {
        let cfg = ConstellationConfig::classic().parallax;
        let vp = Viewport::new(1000.0, 500.0, 1.0);
        let mut parallax = Parallax::new(&cfg);
        assert_eq!(parallax.offset(&cfg), Vec2::ZERO);

        parallax.set_pointer(Vec2::new(1000.0, 0.0), &vp);
        parallax.tick();
        let o = parallax.offset(&cfg);
        // 0.5 * 0.08 * 40
        assert!((o.x - 1.6).abs() < 1e-5);
        assert!((o.y + 1.6).abs() < 1e-5);

        for _ in 0..500 {
            parallax.tick();
        }
        let o = parallax.offset(&cfg);
        assert!((o.x - 20.0).abs() < 1e-3 && (o.y + 20.0).abs() < 1e-3);
    }

    #[test]
    fn drift_amplitude_is_per_axis() {
        let cfg = ConstellationConfig::drift().parallax;
        let vp = Viewport::new(1000.0, 500.0, 1.0);
        let mut parallax = Parallax::new(&cfg);
        parallax.set_pointer(Vec2::new(1000.0, 500.0), &vp);
        for _ in 0..500 {
            parallax.tick();
        }
        let o = parallax.offset(&cfg);
        assert!((o.x - 18.0).abs() < 1e-3, "{:?}", o);
        assert!((o.y - 14.0).abs() < 1e-3, "{:?}", o);
    }

    #[test]
    fn empty_viewport_is_ignored() {
        let cfg = ConstellationConfig::classic().parallax;
        let mut parallax = Parallax::new(&cfg);
        parallax.set_pointer(Vec2::new(10.0, 10.0), &Viewport::new(0.0, 0.0, 1.0));
        parallax.tick();
        assert_eq!(parallax.offset(&cfg), Vec2::ZERO);
    }
}
