use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::domain::config::ConstellationConfig;
use crate::render::CanvasSurface;

use super::frame_stats::FrameStats;
use super::ConstellationCore;

/// Host-driven constellation: JS owns the loop and calls `step` + `render`.
#[wasm_bindgen]
pub struct Constellation {
    core: ConstellationCore,
}

#[wasm_bindgen]
impl Constellation {
    /// Classic preset sized to the given viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            core: ConstellationCore::with_defaults(width, height, dpr),
        }
    }

    /// Config JSON layered over its `preset` (default classic); fixed seed
    /// for reproducible fields.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        config_json: &str,
        width: f32,
        height: f32,
        dpr: f32,
        seed: u32,
    ) -> Result<Constellation, JsValue> {
        let config = ConstellationConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        let core = ConstellationCore::new(config, width, height, dpr, seed)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.viewport().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.viewport().height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn parallax_x(&self) -> f32 { self.core.parallax_offset().x }

    #[wasm_bindgen(getter)]
    pub fn parallax_y(&self) -> f32 { self.core.parallax_offset().y }

    #[wasm_bindgen(getter)]
    pub fn dot_x(&self) -> Option<f32> { self.core.cursor_followers().map(|(dot, _)| dot.x) }

    #[wasm_bindgen(getter)]
    pub fn dot_y(&self) -> Option<f32> { self.core.cursor_followers().map(|(dot, _)| dot.y) }

    #[wasm_bindgen(getter)]
    pub fn ring_x(&self) -> Option<f32> { self.core.cursor_followers().map(|(_, ring)| ring.x) }

    #[wasm_bindgen(getter)]
    pub fn ring_y(&self) -> Option<f32> { self.core.cursor_followers().map(|(_, ring)| ring.y) }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.core.pointer_leave();
    }

    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.core.resize(width, height, dpr);
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    /// Paint onto `ctx`, resizing its canvas first if the viewport changed.
    pub fn render(&mut self, ctx: CanvasRenderingContext2d) -> Result<(), JsValue> {
        let mut surface = CanvasSurface::from_context(ctx).map_err(|e| JsValue::from_str(&e))?;
        surface.ensure_configured(self.core.viewport());
        self.core.render(&mut surface);
        Ok(())
    }

    pub fn render_trail(&mut self, ctx: CanvasRenderingContext2d) -> Result<u32, JsValue> {
        let mut surface = CanvasSurface::from_context(ctx).map_err(|e| JsValue::from_str(&e))?;
        surface.ensure_configured(self.core.viewport());
        Ok(self.core.render_trail(&mut surface))
    }

    /// Drawn positions as `[x0, y0, x1, y1, ...]`
    pub fn particle_positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.core.field().len() * 2);
        for p in self.core.field().positions() {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    pub fn stats(&self) -> FrameStats {
        self.core.stats()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}
