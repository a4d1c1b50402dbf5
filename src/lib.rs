#![cfg(target_arch = "wasm32")]
//! AAC card viewer: one full-screen speakable card at a time, paged by
//! vertical swipes with momentum, wheel ticks, or the keyboard.

use crate::core::{default_deck, CarouselController, LongPressRepeat};
use crate::frame::{FrameContext, PressChannel, RepeatSource};
use crate::speech::{SpeechService, VoicePreference};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod speech;

use crate::constants::{NO_TEXT, YES_TEXT};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tapspeak-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if !STARTED.swap(true, Ordering::SeqCst) {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage = dom::require_element(&document, "card-stage")?;

    // The settings dashboard (separate app) writes the voice preference
    // onto the stage element.
    let preference = VoicePreference::from_attr(stage.get_attribute("data-voice").as_deref());
    let speech = Rc::new(SpeechService::init(preference)?);

    let deck = Rc::new(default_deck());
    let controller = Rc::new(RefCell::new(CarouselController::new(deck.len())));
    let card_stage = render::CardStage::attach(&document)?;
    log::info!("[deck] {} cards", deck.len());

    // Keep the start overlay up until a tap unlocks speech output.
    overlay::show(&document);
    for id in ["overlay-ok", "start-overlay"] {
        let speech_unlock = speech.clone();
        dom::add_click_listener(&document, id, move || {
            speech_unlock.unlock();
            if let Some(d) = dom::window_document() {
                overlay::hide(&d);
            }
        });
    }

    let queued_bounce = Rc::new(RefCell::new(false));
    let press_card = Rc::new(RefCell::new(LongPressRepeat::new()));
    let press_yes = Rc::new(RefCell::new(LongPressRepeat::new()));
    let press_no = Rc::new(RefCell::new(LongPressRepeat::new()));

    let wiring = events::InputWiring {
        stage,
        controller: controller.clone(),
        deck: deck.clone(),
        speech: speech.clone(),
        queued_bounce: queued_bounce.clone(),
        press_card: press_card.clone(),
        press_yes: press_yes.clone(),
        press_no: press_no.clone(),
    };
    events::wire_drag_handlers(&wiring);
    events::wire_press_buttons(&wiring);
    events::wire_wheel(&wiring);
    events::wire_global_keydown(&wiring);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        controller,
        deck,
        speech,
        stage: card_stage,
        queued_bounce,
        presses: vec![
            PressChannel {
                machine: press_card,
                source: RepeatSource::CurrentCard,
            },
            PressChannel {
                machine: press_yes,
                source: RepeatSource::Phrase(YES_TEXT),
            },
            PressChannel {
                machine: press_no,
                source: RepeatSource::Phrase(NO_TEXT),
            },
        ],
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
