//! Browser binding
//!
//! [`mount`] wires a constellation to a `<canvas>`: it sizes the canvas,
//! installs passive pointer/touch/resize listeners that feed an
//! `InputHandle`, and drives frames with `requestAnimationFrame`. Failures
//! that only cost the decoration (no window, no canvas, no 2D context)
//! degrade to an inert handle with a console warning.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlElement};

use crate::core::math::random::entropy_seed;
use crate::core::math::Vec2;
use crate::domain::config::ConstellationConfig;
use crate::driver::{AnimationDriver, StartOutcome};
use crate::render::{CanvasSurface, Surface};
use crate::simulation::ConstellationCore;

mod dom;
mod listeners;
mod scheduler;

pub use scheduler::RafScheduler;

use listeners::{pointer_listeners, Listener};
use scheduler::FrameCallback;

/// Default id of the cursor trail canvas
pub const TRAIL_CANVAS_ID: &str = "cursor-trail";

type Driver = AnimationDriver<RafScheduler, CanvasSurface>;

struct Mounted {
    driver: Rc<RefCell<Driver>>,
    frame_callback: FrameCallback,
    listeners: Vec<Listener>,
}

impl Mounted {
    fn teardown(self) {
        if let Ok(mut driver) = self.driver.try_borrow_mut() {
            driver.stop();
        }
        // Breaks the driver <-> callback cycle.
        self.frame_callback.borrow_mut().take();
        for listener in self.listeners {
            listener.remove();
        }
    }
}

/// Handle returned by [`mount`]; `stop()` tears everything down.
#[wasm_bindgen]
pub struct MountHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl MountHandle {
    /// Cancel the loop, remove listeners and detach the surfaces. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.teardown();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.with_driver(|d| d.is_running()).unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.with_driver(|d| d.core().particle_count()).unwrap_or(0)
    }

    pub fn stats(&self) -> Option<crate::simulation::FrameStats> {
        self.with_driver(|d| d.core().stats())
    }
}

impl MountHandle {
    fn inert() -> Self {
        Self { mounted: None }
    }

    fn with_driver<T>(&self, f: impl FnOnce(&Driver) -> T) -> Option<T> {
        let mounted = self.mounted.as_ref()?;
        let driver = mounted.driver.try_borrow().ok()?;
        Some(f(&driver))
    }
}

/// Start the constellation on `#canvas_id`, creating the canvas if absent.
///
/// `config_json` is layered over its `preset` (default `classic`). An invalid
/// document is an error; a missing window or 2D context is not.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, config_json: Option<String>) -> Result<MountHandle, JsValue> {
    let mut config = match config_json.as_deref() {
        Some(json) => ConstellationConfig::from_json(json).map_err(|e| {
            console_warn!("constellation: rejected config: {}", e);
            JsValue::from_str(&e)
        })?,
        None => ConstellationConfig::default(),
    };

    let Some(window) = web_sys::window() else {
        console_warn!("constellation: no window, not mounted");
        return Ok(MountHandle::inert());
    };
    let Some(document) = window.document() else {
        console_warn!("constellation: no document, not mounted");
        return Ok(MountHandle::inert());
    };

    let reduced_motion = dom::media_matches(&window, dom::REDUCED_MOTION_QUERY);
    let fine_hover = dom::media_matches(&window, dom::FINE_POINTER_QUERY)
        && dom::media_matches(&window, dom::HOVER_QUERY);
    let root = dom::root_element(&document);

    let layers = Layers::plan(reduced_motion, config.trail.enabled, fine_hover);
    if !layers.constellation {
        if let Some(root) = root.as_ref() {
            dom::write_parallax_vars(root, Vec2::ZERO);
        }
        console_log!("reduced motion preferred; constellation left idle");
        return Ok(MountHandle::inert());
    }

    let surface = match attach_canvas(&document, canvas_id) {
        Ok(surface) => Some(surface),
        Err(e) => {
            console_warn!("constellation: {}", e);
            None
        }
    };
    let cursor_surface = if layers.trail && surface.is_some() {
        let id = config.trail.canvas_id.as_deref().unwrap_or(TRAIL_CANVAS_ID);
        attach_canvas(&document, id)
            .map_err(|e| console_warn!("constellation: cursor trail disabled: {}", e))
            .ok()
    } else {
        None
    };
    if cursor_surface.is_none() {
        config.trail.enabled = false;
    }

    let (width, height, dpr) = dom::measure(&window);
    let core = match ConstellationCore::new(config, width, height, dpr, entropy_seed()) {
        Ok(core) => core,
        Err(e) => {
            for mut created in [surface, cursor_surface].into_iter().flatten() {
                created.release();
            }
            return Err(JsValue::from_str(&e));
        }
    };

    let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
    let driver = AnimationDriver::new(
        core,
        RafScheduler::new(window.clone(), frame_callback.clone()),
        surface,
    )
    .with_cursor_surface(cursor_surface);
    let input = driver.input();
    let driver = Rc::new(RefCell::new(driver));

    *frame_callback.borrow_mut() = Some(frame_closure(driver.clone(), root));

    let window_target: &EventTarget = window.as_ref();
    let mut listeners = pointer_listeners(window_target, &input)?;
    listeners.push(Listener::passive(window_target, "resize", {
        let window = window.clone();
        let input = input.clone();
        move |_| {
            let (w, h, dpr) = dom::measure(&window);
            input.resize(w, h, dpr);
        }
    })?);
    listeners.push(Listener::passive(window_target, "beforeunload", {
        let driver = driver.clone();
        move |_| {
            if let Ok(mut d) = driver.try_borrow_mut() {
                d.stop();
            }
        }
    })?);

    let mounted = Mounted { driver: driver.clone(), frame_callback, listeners };
    let outcome = driver.borrow_mut().start();
    match outcome {
        Ok(StartOutcome::Running) => {
            let d = driver.borrow();
            let vp = d.core().viewport();
            console_log!(
                "constellation: {} particles on {}x{} @{}x",
                d.core().particle_count(),
                vp.width(),
                vp.height(),
                vp.dpr()
            );
        }
        Ok(StartOutcome::ReducedMotion) | Ok(StartOutcome::SurfaceUnavailable) => {}
        Err(e) => {
            mounted.teardown();
            return Err(e.into());
        }
    }

    Ok(MountHandle { mounted: Some(mounted) })
}

/// Canvases `mount` is allowed to create
#[derive(Clone, Copy, Debug, PartialEq)]
struct Layers {
    constellation: bool,
    trail: bool,
}

impl Layers {
    /// Reduced motion gets nothing: no canvas is created or touched.
    /// The trail also needs a fine, hover-capable pointer.
    fn plan(reduced_motion: bool, trail_enabled: bool, fine_hover: bool) -> Self {
        if reduced_motion {
            return Self { constellation: false, trail: false };
        }
        Self { constellation: true, trail: trail_enabled && fine_hover }
    }
}

/// Canvas `#id` with a 2D context. A canvas created here is removed again
/// when no context can be had.
fn attach_canvas(document: &Document, id: &str) -> Result<CanvasSurface, String> {
    let (canvas, owned) = dom::find_or_create_canvas(document, id)?;
    CanvasSurface::from_canvas(canvas.clone(), owned).map_err(|e| {
        if owned {
            canvas.remove();
        }
        e
    })
}

fn frame_closure(driver: Rc<RefCell<Driver>>, root: Option<HtmlElement>) -> Closure<dyn FnMut(f64)> {
    Closure::wrap(Box::new(move |_timestamp: f64| {
        let Ok(mut d) = driver.try_borrow_mut() else {
            return;
        };
        if !d.on_frame() {
            return;
        }
        let Some(root) = root.as_ref() else {
            return;
        };
        let core = d.core();
        if core.config().parallax.enabled {
            dom::write_parallax_vars(root, core.parallax_offset());
        }
        dom::write_cursor_vars(root, core.pointer().smoothed());
        if let Some((dot, ring)) = core.cursor_followers() {
            dom::write_follower_vars(root, dot, ring);
        }
    }) as Box<dyn FnMut(f64)>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_plans_no_canvas() {
        assert_eq!(Layers::plan(true, true, true), Layers { constellation: false, trail: false });
    }

    #[test]
    fn trail_needs_a_fine_hover_pointer() {
        assert_eq!(Layers::plan(false, true, true), Layers { constellation: true, trail: true });
        assert_eq!(Layers::plan(false, true, false), Layers { constellation: true, trail: false });
        assert_eq!(Layers::plan(false, false, true), Layers { constellation: true, trail: false });
    }
}
