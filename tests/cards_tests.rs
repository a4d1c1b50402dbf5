// Host-side tests for the card deck and palette.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod cards {
        include!("../src/core/cards.rs");
    }
}

use crate::core::cards::*;
use crate::core::constants::CARD_PALETTE;

#[test]
fn empty_deck_is_rejected() {
    assert!(Deck::new(vec![]).is_err());
}

#[test]
fn single_card_deck_is_accepted() {
    let deck = Deck::new(vec![Card::new("hi", "Hi", "\u{1F44B}", "Hello")]).unwrap();
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.card(0).speak_text, "Hello");
}

#[test]
fn card_access_is_cyclic() {
    let deck = default_deck();
    let n = deck.len();
    assert_eq!(deck.card(n).id, deck.card(0).id);
    assert_eq!(deck.card(n + 2).id, deck.card(2).id);
}

#[test]
fn default_deck_is_usable() {
    let deck = default_deck();
    assert!(deck.len() >= 1);
    for i in 0..deck.len() {
        let card = deck.card(i);
        assert!(!card.label.is_empty());
        assert!(!card.speak_text.is_empty());
    }
}

#[test]
fn palette_is_a_pure_function_of_position() {
    // Color depends on the deck slot, not the card occupying it.
    assert_eq!(palette_color(0), CARD_PALETTE[0]);
    assert_eq!(palette_color(3), CARD_PALETTE[3]);
    assert_eq!(palette_color(7), palette_color(0));
    assert_eq!(palette_color(10), palette_color(3));
}
