//! Deck rules shared by the repository, API and client layers.

/// Entity name used in not-found errors for decks.
pub const DECK_ENTITY: &str = "Deck";

/// Title of the slide seeded into every newly created deck.
pub const DEFAULT_SLIDE_TITLE: &str = "First Slide";

/// `slide_order` of the slide seeded into every newly created deck.
pub const DEFAULT_SLIDE_ORDER: i32 = 1;
