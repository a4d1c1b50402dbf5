use crate::core::{CarouselController, Deck, LongPressRepeat};
use crate::speech::SpeechService;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod keyboard;
pub mod pointer;
pub mod wheel;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_drag_handlers, wire_press_buttons};
pub use wheel::wire_wheel;

/// Everything the event handlers share. Cloned into each closure.
#[derive(Clone)]
pub struct InputWiring {
    pub stage: web::HtmlElement,
    pub controller: Rc<RefCell<CarouselController>>,
    pub deck: Rc<Deck>,
    pub speech: Rc<SpeechService>,
    /// Set by discrete interactions (wheel, keyboard, activation); the frame
    /// loop consumes it and replays the settle-bounce visual.
    pub queued_bounce: Rc<RefCell<bool>>,
    pub press_card: Rc<RefCell<LongPressRepeat>>,
    pub press_yes: Rc<RefCell<LongPressRepeat>>,
    pub press_no: Rc<RefCell<LongPressRepeat>>,
}

impl InputWiring {
    /// Phrase of the card currently facing the user.
    pub fn current_phrase(&self) -> String {
        self.deck
            .card(self.controller.borrow().current_index())
            .speak_text
            .clone()
    }

    /// Speak the current card and queue its bounce (tap/press of the
    /// central speak button, or keyboard activation).
    pub fn activate_current_card(&self) {
        let phrase = self.current_phrase();
        log::info!("[card] activate: {phrase}");
        self.speech.speak(&phrase);
        *self.queued_bounce.borrow_mut() = true;
    }
}
