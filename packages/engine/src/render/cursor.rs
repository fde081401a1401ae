//! Cursor trail layer. Painted on its own surface above the page content.

use crate::domain::color::Rgba;
use crate::domain::config::{Palette, TrailConfig};
use crate::domain::viewport::Viewport;
use crate::systems::CursorTrail;

use super::{BlendMode, GlowStop, Surface};

const SPARK_INNER_ALPHA: f32 = 0.20;
const SPARK_OUTER_OFFSET: f32 = 0.45;
const SPARK_OUTER_ALPHA: f32 = 0.14;

/// Clear the trail surface and paint every live spark as an additive glow
/// scaled by its remaining life. Returns the number of sparks drawn.
pub fn render_trail<S: Surface + ?Sized>(
    surface: &mut S,
    trail: &CursorTrail,
    viewport: &Viewport,
    palette: &Palette,
    cfg: &TrailConfig,
) -> u32 {
    surface.clear(viewport.width(), viewport.height());
    surface.set_blend(BlendMode::Lighter);

    let mut drawn = 0;
    for spark in trail.sparks() {
        let a = spark.life.max(0.0);
        if a <= 0.0 {
            continue;
        }
        let stops = [
            GlowStop::new(0.0, Rgba::new(palette.line_a, SPARK_INNER_ALPHA * a)),
            GlowStop::new(SPARK_OUTER_OFFSET, Rgba::new(palette.line_b, SPARK_OUTER_ALPHA * a)),
            GlowStop::new(1.0, Rgba::TRANSPARENT),
        ];
        surface.glow(spark.pos, spark.radius * cfg.glow_scale, &stops);
        drawn += 1;
    }

    surface.set_blend(BlendMode::SourceOver);
    drawn
}
