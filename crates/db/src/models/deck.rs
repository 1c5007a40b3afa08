//! Deck entity model, DTOs, and the deck-with-slides composite.

use serde::{Deserialize, Serialize};
use slidedeck_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use ts_rs::TS;
use validator::Validate;

use crate::models::slide::Slide;

/// A row from the `decks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Deck {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A deck together with all its slides, ordered by `slide_order`.
///
/// Serializes flat: the deck's own fields plus a `slides` array. Used to
/// hydrate the presentation view in a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeckWithSlides {
    #[serde(flatten)]
    pub deck: Deck,
    pub slides: Vec<Slide>,
}

/// DTO for creating a new deck.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDeck {
    #[validate(length(min = 1, message = "Deck name is required"))]
    pub name: String,
}

/// DTO for renaming an existing deck.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDeck {
    #[validate(length(min = 1, message = "Deck name is required"))]
    pub name: String,
}
