//! Constellation Engine - animated particle constellation for a `<canvas>`
//!
//! Drifting points joined by distance-faded links, pointer highlight links,
//! optional pointer repulsion, a cursor trail and a parallax offset.
//!
//! Architecture:
//! - core/        - math (vectors, xorshift rng) and console logging
//! - domain/      - configuration, viewport, colors
//! - spatial/     - uniform grid for neighbor queries
//! - systems/     - particle field, pointer, trail, parallax
//! - render/      - `Surface` trait, frame painters, canvas + recording surfaces
//! - simulation/  - `ConstellationCore` + the `Constellation` JS facade
//! - driver/      - start/stop/resize state machine over a frame scheduler
//! - web/         - `mount()`: canvas, listeners, requestAnimationFrame

// Logging macros must be first for textual macro scope.
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod render;
pub mod simulation;
pub mod driver;
pub mod web;

use wasm_bindgen::prelude::*;

pub use domain::config::ConstellationConfig;
pub use domain::viewport::Viewport;
pub use driver::{AnimationDriver, DriverError, InputHandle, StartOutcome};
pub use render::{DrawList, Surface};
pub use simulation::{Constellation, ConstellationCore, FrameStats};
pub use web::{mount, MountHandle};

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("✨ Constellation engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Built-in preset as a config document, or `undefined` for unknown names.
#[wasm_bindgen]
pub fn preset_json(name: &str) -> Option<String> {
    ConstellationConfig::preset(name).map(|c| c.to_json())
}
