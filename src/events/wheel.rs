use crate::events::InputWiring;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse-wheel paging: one tick moves exactly one card, instantly, with the
/// settle-bounce visual but none of the momentum physics. The controller
/// ignores ticks while a drag or settle animation is in flight.
pub fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let stage_for_listener = w.stage.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let changed = w.controller.borrow_mut().on_wheel_tick(ev.delta_y() as f32);
        if changed {
            log::info!(
                "[wheel] tick -> index {}",
                w.controller.borrow().current_index()
            );
            *w.queued_bounce.borrow_mut() = true;
        }
    }) as Box<dyn FnMut(_)>);

    _ = stage_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
