//! Card stack renderer.
//!
//! Three absolutely-positioned layers (previous, current, next) are
//! translated by the published drag/settle offset each frame; only the
//! current card is ever fully on screen. Colors come from the position
//! palette, so a card's color follows its slot in the deck. The speak and
//! yes/no buttons are static page elements overlaid on the stage and are
//! never touched here.

use crate::constants::BOUNCE_CLASS;
use crate::core::{palette_color, Card, Deck};
use crate::dom;
use std::cell::Cell;
use web_sys as web;

pub struct CardStage {
    prev: web::HtmlElement,
    current: web::HtmlElement,
    next: web::HtmlElement,
    // last index whose contents were written into the layers
    filled_index: Cell<Option<usize>>,
}

impl CardStage {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            prev: dom::require_element(document, "card-prev")?,
            current: dom::require_element(document, "card-current")?,
            next: dom::require_element(document, "card-next")?,
            filled_index: Cell::new(None),
        })
    }

    /// Publish one frame of the stack. `offset` is pixels of vertical drag
    /// (positive = dragged downward, previous card descending into view).
    /// Card contents are rewritten only when the index changes; transforms
    /// are updated every frame.
    pub fn render(&self, deck: &Deck, index: usize, offset: f32, viewport_h: f32) {
        if self.filled_index.get() != Some(index) {
            let n = deck.len();
            let prev_index = (index + n - 1) % n;
            let next_index = (index + 1) % n;
            fill_card(&self.prev, deck.card(prev_index), prev_index);
            fill_card(&self.current, deck.card(index), index);
            fill_card(&self.next, deck.card(next_index), next_index);
            self.filled_index.set(Some(index));
        }

        dom::set_translate_y(&self.prev, offset - viewport_h);
        dom::set_translate_y(&self.current, offset);
        dom::set_translate_y(&self.next, offset + viewport_h);
    }

    /// Replay the settle-bounce animation on the current card. Removing the
    /// class and forcing a reflow restarts the CSS animation.
    pub fn bounce(&self) {
        let classes = self.current.class_list();
        _ = classes.remove_1(BOUNCE_CLASS);
        let _ = self.current.offset_width();
        _ = classes.add_1(BOUNCE_CLASS);
    }
}

fn fill_card(el: &web::HtmlElement, card: &Card, deck_index: usize) {
    el.set_inner_html(&format!(
        "<div class='card-emoji'>{}</div><div class='card-label'>{}</div>",
        card.emoji, card.label,
    ));
    _ = el
        .style()
        .set_property("background-color", palette_color(deck_index));
}
