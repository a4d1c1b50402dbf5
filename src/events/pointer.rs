use crate::constants::{NO_TEXT, YES_TEXT};
use crate::core::LongPressRepeat;
use crate::dom;
use crate::events::InputWiring;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn pointer_stage_px(ev: &web::PointerEvent, stage: &web::HtmlElement) -> Vec2 {
    let rect = stage.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Drag gestures on the card stage. Down is wired on the stage itself;
/// move/up go on the window so a drag survives leaving the stage.
pub fn wire_drag_handlers(w: &InputWiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let stage_for_listener = w.stage.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_stage_px(&ev, &w.stage);
        w.controller
            .borrow_mut()
            .on_drag_start(pos.y, ev.time_stamp());
        log::info!("[drag] start at y={:.1}", pos.y);
        _ = w.stage.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = stage_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // no-op inside the controller unless a drag is active
        let pos = pointer_stage_px(&ev, &w.stage);
        w.controller
            .borrow_mut()
            .on_drag_move(pos.y, ev.time_stamp());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut c = w.controller.borrow_mut();
        if c.is_dragging() {
            c.on_drag_end();
            log::info!("[drag] released at offset {:.1}", c.drag_offset());
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Speakable buttons: the central card speak button and the yes/no side
/// buttons. Press speaks immediately and arms the long-press repeat;
/// release (or the pointer leaving) stops the cycle. Presses never start a
/// carousel drag.
pub fn wire_press_buttons(w: &InputWiring) {
    wire_press(w, "card-speak", w.press_card.clone(), None);
    wire_press(w, "btn-yes", w.press_yes.clone(), Some(YES_TEXT));
    wire_press(w, "btn-no", w.press_no.clone(), Some(NO_TEXT));
}

fn wire_press(
    w: &InputWiring,
    element_id: &str,
    machine: Rc<RefCell<LongPressRepeat>>,
    fixed_phrase: Option<&'static str>,
) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[press] missing #{element_id}");
        return;
    };

    {
        let w = w.clone();
        let machine = machine.clone();
        let down = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            ev.stop_propagation();
            ev.prevent_default();
            machine.borrow_mut().on_press(dom::now_ms());
            match fixed_phrase {
                Some(phrase) => w.speech.speak(phrase),
                None => w.activate_current_card(),
            }
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("pointerdown", down.as_ref().unchecked_ref());
        down.forget();
    }

    for event in ["pointerup", "pointercancel", "pointerleave"] {
        let machine = machine.clone();
        let up = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            machine.borrow_mut().on_release();
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback(event, up.as_ref().unchecked_ref());
        up.forget();
    }
}
