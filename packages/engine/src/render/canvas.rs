//! `<canvas>` 2D context surface.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{BlendMode, GlowStop, Surface};
use crate::core::math::Vec2;
use crate::domain::color::Rgba;
use crate::domain::viewport::Viewport;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Created by us; removed from the document on release
    owned: bool,
}

impl CanvasSurface {
    /// Acquire a transparent 2D context. Fails when the browser refuses one.
    pub fn from_canvas(canvas: HtmlCanvasElement, owned: bool) -> Result<Self, String> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::TRUE)
            .map_err(|_| "failed to build context options".to_string())?;
        js_sys::Reflect::set(&options, &JsValue::from_str("desynchronized"), &JsValue::TRUE)
            .map_err(|_| "failed to build context options".to_string())?;

        let ctx = canvas
            .get_context_with_context_options("2d", &options)
            .map_err(|e| format!("getContext failed: {:?}", e))?
            .ok_or_else(|| "2d context unavailable".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "context is not a CanvasRenderingContext2d".to_string())?;

        Ok(Self { canvas, ctx, owned })
    }

    /// Wrap a context the host already owns. Never removes its canvas.
    pub fn from_context(ctx: CanvasRenderingContext2d) -> Result<Self, String> {
        let canvas = ctx
            .canvas()
            .ok_or_else(|| "context is not attached to a canvas".to_string())?;
        Ok(Self { canvas, ctx, owned: false })
    }

    /// Configure only when the backing store does not match `viewport`.
    pub fn ensure_configured(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.backing_size();
        if self.canvas.width() != width || self.canvas.height() != height {
            self.configure(viewport);
        }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    fn fill_circle(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }
}

impl Surface for CanvasSurface {
    fn configure(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.backing_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", viewport.width()));
        let _ = style.set_property("height", &format!("{}px", viewport.height()));

        let dpr = viewport.dpr() as f64;
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_blend(&mut self, mode: BlendMode) {
        let _ = self.ctx.set_global_composite_operation(mode.as_css());
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.fill_circle(center, radius);
    }

    fn glow(&mut self, center: Vec2, radius: f32, stops: &[GlowStop]) {
        if radius <= 0.0 {
            return;
        }
        let (x, y) = (center.x as f64, center.y as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius as f64) else {
            return;
        };
        for stop in stops {
            let _ = gradient.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.fill_circle(center, radius);
    }

    fn release(&mut self) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        if self.owned {
            self.canvas.remove();
        }
    }
}
