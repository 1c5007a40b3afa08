//! The operations the view layer needs from a deck backend.

use async_trait::async_trait;
use slidedeck_core::types::DbId;
use slidedeck_db::models::deck::{CreateDeck, Deck, DeckWithSlides, UpdateDeck};
use slidedeck_db::models::slide::{CreateSlide, Slide, UpdateSlide};

use crate::api::{ClientError, DeckApi};

/// Deck and slide operations, implemented over HTTP by [`DeckApi`] and by
/// in-memory fakes in tests.
#[async_trait]
pub trait DeckService: Send + Sync {
    async fn list_decks(&self) -> Result<Vec<Deck>, ClientError>;

    async fn get_deck(&self, id: DbId) -> Result<Option<Deck>, ClientError>;

    async fn create_deck(&self, input: &CreateDeck) -> Result<Deck, ClientError>;

    async fn update_deck(&self, id: DbId, input: &UpdateDeck) -> Result<Deck, ClientError>;

    async fn delete_deck(&self, id: DbId) -> Result<(), ClientError>;

    async fn list_slides(&self, deck_id: DbId) -> Result<Vec<Slide>, ClientError>;

    async fn get_deck_with_slides(&self, id: DbId) -> Result<Option<DeckWithSlides>, ClientError>;

    async fn create_slide(&self, input: &CreateSlide) -> Result<Slide, ClientError>;

    async fn update_slide(&self, id: DbId, input: &UpdateSlide) -> Result<Slide, ClientError>;

    async fn delete_slide(&self, id: DbId) -> Result<(), ClientError>;
}

#[async_trait]
impl DeckService for DeckApi {
    async fn list_decks(&self) -> Result<Vec<Deck>, ClientError> {
        DeckApi::list_decks(self).await
    }

    async fn get_deck(&self, id: DbId) -> Result<Option<Deck>, ClientError> {
        DeckApi::get_deck(self, id).await
    }

    async fn create_deck(&self, input: &CreateDeck) -> Result<Deck, ClientError> {
        DeckApi::create_deck(self, input).await
    }

    async fn update_deck(&self, id: DbId, input: &UpdateDeck) -> Result<Deck, ClientError> {
        DeckApi::update_deck(self, id, input).await
    }

    async fn delete_deck(&self, id: DbId) -> Result<(), ClientError> {
        DeckApi::delete_deck(self, id).await
    }

    async fn list_slides(&self, deck_id: DbId) -> Result<Vec<Slide>, ClientError> {
        DeckApi::list_slides(self, deck_id).await
    }

    async fn get_deck_with_slides(&self, id: DbId) -> Result<Option<DeckWithSlides>, ClientError> {
        DeckApi::get_deck_with_slides(self, id).await
    }

    async fn create_slide(&self, input: &CreateSlide) -> Result<Slide, ClientError> {
        DeckApi::create_slide(self, input).await
    }

    async fn update_slide(&self, id: DbId, input: &UpdateSlide) -> Result<Slide, ClientError> {
        DeckApi::update_slide(self, id, input).await
    }

    async fn delete_slide(&self, id: DbId) -> Result<(), ClientError> {
        DeckApi::delete_slide(self, id).await
    }
}
