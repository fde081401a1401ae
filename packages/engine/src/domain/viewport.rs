//! Viewport geometry in css pixels plus the (capped) device pixel ratio.

use crate::core::math::Vec2;

/// Default cap on device pixel ratio; bounds fill-rate cost on dense displays.
pub const MAX_DEVICE_PIXEL_RATIO: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    dpr: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self::with_dpr_cap(width, height, dpr, MAX_DEVICE_PIXEL_RATIO)
    }

    /// Negative or non-finite sizes collapse to 0, a missing ratio becomes 1.
    pub fn with_dpr_cap(width: f32, height: f32, dpr: f32, dpr_cap: f32) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self {
            width: non_negative(width),
            height: non_negative(height),
            dpr: dpr.min(dpr_cap.max(1.0)),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 { self.width }

    #[inline]
    pub fn height(&self) -> f32 { self.height }

    #[inline]
    pub fn dpr(&self) -> f32 { self.dpr }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Backing store size in device pixels
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }

    pub fn contains_with_margin(&self, p: Vec2, margin: f32) -> bool {
        p.x >= -margin
            && p.x <= self.width + margin
            && p.y >= -margin
            && p.y <= self.height + margin
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
