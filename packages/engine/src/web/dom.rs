use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::core::math::Vec2;

pub(crate) const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub(crate) const FINE_POINTER_QUERY: &str = "(pointer: fine)";
pub(crate) const HOVER_QUERY: &str = "(hover: hover)";

pub(crate) fn media_matches(window: &Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(list)) if list.matches())
}

/// Window size in css px and the raw device pixel ratio
pub(crate) fn measure(window: &Window) -> (f32, f32, f32) {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (
        px(window.inner_width()),
        px(window.inner_height()),
        window.device_pixel_ratio() as f32,
    )
}

/// The canvas with `id`, or a new one appended to `<body>`.
/// The flag is true when the canvas was created here.
pub(crate) fn find_or_create_canvas(document: &Document, id: &str) -> Result<(HtmlCanvasElement, bool), String> {
    if let Some(el) = document.get_element_by_id(id) {
        let canvas = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| format!("#{} is not a <canvas>", id))?;
        return Ok((canvas, false));
    }

    let body = document.body().ok_or_else(|| "document has no <body>".to_string())?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| format!("createElement failed: {:?}", e))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| "created element is not a <canvas>".to_string())?;
    canvas.set_id(id);
    canvas.set_attribute("aria-hidden", "true").ok();
    body.append_child(&canvas)
        .map_err(|e| format!("appendChild failed: {:?}", e))?;
    Ok((canvas, true))
}

pub(crate) fn root_element(document: &Document) -> Option<HtmlElement> {
    document.document_element()?.dyn_into::<HtmlElement>().ok()
}

fn set_px(root: &HtmlElement, name: &str, value: f32) {
    let _ = root.style().set_property(name, &format!("{:.2}px", value));
}

/// `--px`/`--py` parallax offset
pub(crate) fn write_parallax_vars(root: &HtmlElement, offset: Vec2) {
    set_px(root, "--px", offset.x);
    set_px(root, "--py", offset.y);
}

/// `--cursor-x`/`--cursor-y` eased pointer
pub(crate) fn write_cursor_vars(root: &HtmlElement, cursor: Vec2) {
    set_px(root, "--cursor-x", cursor.x);
    set_px(root, "--cursor-y", cursor.y);
}

/// `--cursor-dot-x/y` and `--cursor-ring-x/y` for the two cursor layers
pub(crate) fn write_follower_vars(root: &HtmlElement, dot: Vec2, ring: Vec2) {
    set_px(root, "--cursor-dot-x", dot.x);
    set_px(root, "--cursor-dot-y", dot.y);
    set_px(root, "--cursor-ring-x", ring.x);
    set_px(root, "--cursor-ring-y", ring.y);
}
