use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent, TouchEvent};

use crate::driver::InputHandle;

/// A registered passive listener; removed explicitly on teardown.
pub(crate) struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub(crate) fn passive<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), kind, callback })
    }

    pub(crate) fn remove(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Pointer listeners on `target`: mouse moves, touch start/move, and a
/// `mouseout` with no related target, which is the mouse leaving the window.
/// Touch has no leave; the pointer stays active after the finger lifts.
pub(crate) fn pointer_listeners(target: &EventTarget, input: &InputHandle) -> Result<Vec<Listener>, JsValue> {
    let on_mouse = {
        let input = input.clone();
        move |e: Event| {
            if let Some(m) = e.dyn_ref::<MouseEvent>() {
                input.move_to(m.client_x() as f32, m.client_y() as f32);
            }
        }
    };
    let on_touch = |input: InputHandle| {
        move |e: Event| {
            let first = e.dyn_ref::<TouchEvent>().and_then(|t| t.touches().get(0));
            if let Some(touch) = first {
                input.move_to(touch.client_x() as f32, touch.client_y() as f32);
            }
        }
    };
    let on_leave = {
        let input = input.clone();
        move |e: Event| {
            // mouseout bubbles from every element; only a null
            // relatedTarget means the pointer left the document.
            if matches!(e.dyn_ref::<MouseEvent>(), Some(m) if m.related_target().is_none()) {
                input.leave();
            }
        }
    };

    Ok(vec![
        Listener::passive(target, "mousemove", on_mouse)?,
        Listener::passive(target, "touchstart", on_touch(input.clone()))?,
        Listener::passive(target, "touchmove", on_touch(input.clone()))?,
        Listener::passive(target, "mouseout", on_leave)?,
    ])
}
