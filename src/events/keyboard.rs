use crate::events::InputWiring;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Map a key to a synthetic wheel delta, or None when the key does not page.
#[inline]
pub fn wheel_delta_for_key(key: &str) -> Option<f32> {
    match key {
        "ArrowDown" | "PageDown" | "j" | "J" => Some(1.0),
        "ArrowUp" | "PageUp" | "k" | "K" => Some(-1.0),
        _ => None,
    }
}

#[inline]
pub fn is_activate_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Keyboard access mirrors the touch surface: arrows page like wheel ticks,
/// Enter/Space speaks the current card.
pub fn wire_global_keydown(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if let Some(delta) = wheel_delta_for_key(&key) {
            ev.prevent_default();
            let changed = w.controller.borrow_mut().on_wheel_tick(delta);
            if changed {
                log::info!(
                    "[key] {key} -> index {}",
                    w.controller.borrow().current_index()
                );
                *w.queued_bounce.borrow_mut() = true;
            }
        } else if is_activate_key(&key) {
            ev.prevent_default();
            w.activate_current_card();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
