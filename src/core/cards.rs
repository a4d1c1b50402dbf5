// Card records and the cyclic deck the carousel pages through.

use super::constants::CARD_PALETTE;

/// One speakable card. Display order is insertion order; the deck wraps at
/// both ends.
#[derive(Clone, Debug)]
pub struct Card {
    pub id: String,
    pub label: String,
    pub emoji: String,
    pub speak_text: String,
    pub image_id: Option<String>,
}

impl Card {
    pub fn new(id: &str, label: &str, emoji: &str, speak_text: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            emoji: emoji.to_string(),
            speak_text: speak_text.to_string(),
            image_id: None,
        }
    }
}

/// Ordered cyclic card sequence, guaranteed non-empty.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Carousel behavior is degenerate for an empty sequence, so it is
    /// rejected here rather than defaulted downstream.
    pub fn new(cards: Vec<Card>) -> anyhow::Result<Self> {
        anyhow::ensure!(!cards.is_empty(), "deck must contain at least one card");
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cyclic access by deck position.
    pub fn card(&self, index: usize) -> &Card {
        &self.cards[index % self.cards.len()]
    }
}

/// Background color is a pure function of deck position, not card identity;
/// reordering cards changes their displayed colors.
pub fn palette_color(index: usize) -> &'static str {
    CARD_PALETTE[index % CARD_PALETTE.len()]
}

/// Built-in starter deck. The settings dashboard that edits decks lives
/// outside this crate; this keeps the viewer usable on first load.
pub fn default_deck() -> Deck {
    let cards = vec![
        Card::new("eat", "Eat", "\u{1F34E}", "I'm hungry"),
        Card::new("drink", "Drink", "\u{1F964}", "I'm thirsty"),
        Card::new("toilet", "Toilet", "\u{1F6BD}", "I need the toilet"),
        Card::new("play", "Play", "\u{1F9F8}", "I want to play"),
        Card::new("hurt", "Hurt", "\u{1F915}", "Something hurts"),
        Card::new("help", "Help", "\u{1F64B}", "I need help"),
        Card::new("happy", "Happy", "\u{1F60A}", "I feel happy"),
        Card::new("sleep", "Sleep", "\u{1F634}", "I'm tired"),
    ];
    Deck::new(cards).expect("built-in deck is non-empty")
}
