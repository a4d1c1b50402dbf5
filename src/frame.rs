use crate::core::{CarouselController, Deck, LongPressRepeat, SettleStep};
use crate::dom;
use crate::render::CardStage;
use crate::speech::SpeechService;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a long-press repeat says when it fires.
pub enum RepeatSource {
    Phrase(&'static str),
    /// Resolved at repeat time so the phrase follows the visible card.
    CurrentCard,
}

pub struct PressChannel {
    pub machine: Rc<RefCell<LongPressRepeat>>,
    pub source: RepeatSource,
}

pub struct FrameContext {
    pub controller: Rc<RefCell<CarouselController>>,
    pub deck: Rc<Deck>,
    pub speech: Rc<SpeechService>,
    pub stage: CardStage,
    pub queued_bounce: Rc<RefCell<bool>>,
    pub presses: Vec<PressChannel>,
}

impl FrameContext {
    /// One animation frame: step the settle physics (a no-op unless a throw
    /// is in flight), publish the stack offset, replay the bounce when a
    /// transition lands, and poll the long-press machines. A drag-start
    /// between frames flips the controller out of the animating phase, so a
    /// cancelled settle is never stepped again.
    pub fn frame(&mut self) {
        let now_ms = dom::now_ms();
        // Thresholds track the live viewport, never a cached height.
        let viewport_h = dom::viewport_height();

        let (index, offset, step) = {
            let mut c = self.controller.borrow_mut();
            let step = c.settle_frame(viewport_h);
            (c.current_index(), c.drag_offset(), step)
        };
        self.stage.render(&self.deck, index, offset, viewport_h);

        let mut bounce = false;
        if let SettleStep::Settled { index, changed } = step {
            log::info!("[carousel] settled at {index} (changed={changed})");
            bounce = true;
        }
        if std::mem::take(&mut *self.queued_bounce.borrow_mut()) {
            bounce = true;
        }
        if bounce {
            self.stage.bounce();
        }

        for channel in &self.presses {
            if channel.machine.borrow_mut().poll(now_ms) {
                let phrase = match &channel.source {
                    RepeatSource::Phrase(p) => (*p).to_string(),
                    RepeatSource::CurrentCard => self
                        .deck
                        .card(self.controller.borrow().current_index())
                        .speak_text
                        .clone(),
                };
                log::info!("[press] repeat: {phrase}");
                self.speech.speak(&phrase);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
