use wasm_bindgen::prelude::*;

/// Counters and timings for the most recent frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) particle_count: u32,
    pub(super) links_drawn: u32,
    pub(super) pointer_links: u32,
    /// Particles displaced by repulsion this frame
    pub(super) nudged: u32,
    pub(super) grid_cols: u32,
    pub(super) grid_rows: u32,
    pub(super) trail_particles: u32,
    pub(super) frame: u64,
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn links_drawn(&self) -> u32 { self.links_drawn }
    #[wasm_bindgen(getter)]
    pub fn pointer_links(&self) -> u32 { self.pointer_links }
    #[wasm_bindgen(getter)]
    pub fn nudged(&self) -> u32 { self.nudged }
    #[wasm_bindgen(getter)]
    pub fn grid_cols(&self) -> u32 { self.grid_cols }
    #[wasm_bindgen(getter)]
    pub fn grid_rows(&self) -> u32 { self.grid_rows }
    #[wasm_bindgen(getter)]
    pub fn trail_particles(&self) -> u32 { self.trail_particles }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
