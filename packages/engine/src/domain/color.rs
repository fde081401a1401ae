/// RGB triple as stored in configuration documents
pub type Rgb = [u8; 3];

/// Straight-alpha color, formatted as a css `rgba()` string at the canvas boundary
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0.0 };

    pub fn new(rgb: Rgb, a: f32) -> Self {
        Self { r: rgb[0], g: rgb[1], b: rgb[2], a: a.clamp(0.0, 1.0) }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.4})", self.r, self.g, self.b, self.a)
    }
}

/// Channel-wise `a * t + b * (1 - t)`, truncated.
pub fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let ch = |i: usize| (a[i] as f32 * t + b[i] as f32 * (1.0 - t)) as u8;
    [ch(0), ch(1), ch(2)]
}
