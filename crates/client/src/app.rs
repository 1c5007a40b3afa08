//! View state machine for the editor client.
//!
//! `List -> DeckEditor -> SlideEditor`, and from any view into
//! `Presentation`, which exits back to the presented deck's editor.
//!
//! Every operation that talks to the [`DeckService`] changes the view or
//! the cached deck list only after the call succeeds. Failures are logged
//! and returned with the previous state intact.

use slidedeck_core::slide::next_slide_order;
use slidedeck_core::types::DbId;
use slidedeck_db::models::deck::{CreateDeck, Deck, UpdateDeck};
use slidedeck_db::models::slide::{CreateSlide, Slide, UpdateSlide};

use crate::api::ClientError;
use crate::presentation::{Command, Key, Playback};
use crate::service::DeckService;

/// The screen currently shown. Selections live inside the variant, so
/// leaving a view drops whatever it had selected.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    List,
    DeckEditor { deck: Deck },
    SlideEditor { deck: Deck, slide: Slide },
    Presentation(Playback),
}

pub struct App<S> {
    service: S,
    view: View,
    decks: Vec<Deck>,
}

impl<S: DeckService> App<S> {
    /// Start on the deck list.
    pub fn new(service: S) -> Self {
        Self {
            service,
            view: View::List,
            decks: Vec::new(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Decks shown by the list view, as of the last load.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// The deck being edited, if any.
    pub fn selected_deck(&self) -> Option<&Deck> {
        match &self.view {
            View::DeckEditor { deck } | View::SlideEditor { deck, .. } => Some(deck),
            View::List | View::Presentation(_) => None,
        }
    }

    pub fn show_list(&mut self) {
        self.view = View::List;
    }

    /// Refresh the cached deck list, most recently updated first.
    pub async fn load_decks(&mut self) -> Result<&[Deck], ClientError> {
        let decks = self
            .service
            .list_decks()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load decks"))?;
        self.decks = decks;
        Ok(&self.decks)
    }

    /// Create a deck and open its editor.
    pub async fn create_deck(&mut self, name: &str) -> Result<Deck, ClientError> {
        let input = CreateDeck {
            name: name.to_string(),
        };
        let deck = self
            .service
            .create_deck(&input)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to create deck"))?;
        tracing::debug!(deck_id = deck.id, "Deck created from list");
        self.decks.insert(0, deck.clone());
        self.view = View::DeckEditor { deck: deck.clone() };
        Ok(deck)
    }

    pub fn open_deck(&mut self, deck: Deck) {
        self.view = View::DeckEditor { deck };
    }

    /// Open a slide of the deck being edited.
    ///
    /// Returns `false` and leaves the view alone when no deck is open or
    /// the slide belongs to another deck.
    pub fn open_slide(&mut self, slide: Slide) -> bool {
        let Some(deck) = self.selected_deck() else {
            return false;
        };
        if deck.id != slide.deck_id {
            return false;
        }
        let deck = deck.clone();
        self.view = View::SlideEditor { deck, slide };
        true
    }

    /// Leave the slide editor for its deck's editor.
    pub fn close_slide(&mut self) {
        if let View::SlideEditor { deck, .. } = &self.view {
            self.view = View::DeckEditor { deck: deck.clone() };
        }
    }

    /// Rename the open deck and keep the editor showing the new name.
    ///
    /// Returns `Ok(None)` when no deck is open.
    pub async fn rename_deck(&mut self, name: &str) -> Result<Option<Deck>, ClientError> {
        let Some(id) = self.selected_deck().map(|d| d.id) else {
            return Ok(None);
        };
        let input = UpdateDeck {
            name: name.to_string(),
        };
        let deck = self
            .service
            .update_deck(id, &input)
            .await
            .inspect_err(|e| tracing::warn!(deck_id = id, error = %e, "Failed to rename deck"))?;
        match &mut self.view {
            View::DeckEditor { deck: current } | View::SlideEditor { deck: current, .. } => {
                *current = deck.clone();
            }
            View::List | View::Presentation(_) => {}
        }
        if let Some(cached) = self.decks.iter_mut().find(|d| d.id == id) {
            *cached = deck.clone();
        }
        Ok(Some(deck))
    }

    /// Append a slide to the open deck, ordered after the existing ones.
    ///
    /// Returns `Ok(None)` when no deck is open.
    pub async fn add_slide(&mut self, title: &str) -> Result<Option<Slide>, ClientError> {
        let Some(deck_id) = self.selected_deck().map(|d| d.id) else {
            return Ok(None);
        };
        let result = async {
            let existing = self.service.list_slides(deck_id).await?;
            let input = CreateSlide {
                deck_id,
                title: title.to_string(),
                body_text: None,
                image_url: None,
                slide_order: next_slide_order(existing.len()),
            };
            self.service.create_slide(&input).await
        }
        .await;
        let slide =
            result.inspect_err(|e| tracing::warn!(deck_id, error = %e, "Failed to add slide"))?;
        tracing::debug!(deck_id, slide_id = slide.id, "Slide added from editor");
        Ok(Some(slide))
    }

    /// Delete a slide of the open deck.
    ///
    /// Returns `Ok(false)` when no deck is open. Deleting the slide open in
    /// the slide editor returns to the deck editor.
    pub async fn delete_slide(&mut self, slide_id: DbId) -> Result<bool, ClientError> {
        if self.selected_deck().is_none() {
            return Ok(false);
        }
        self.service
            .delete_slide(slide_id)
            .await
            .inspect_err(|e| tracing::warn!(slide_id, error = %e, "Failed to delete slide"))?;
        if let View::SlideEditor { deck, slide } = &self.view {
            if slide.id == slide_id {
                self.view = View::DeckEditor { deck: deck.clone() };
            }
        }
        Ok(true)
    }

    /// Save edits to the slide open in the slide editor.
    ///
    /// The editor then holds the server's copy. Returns `Ok(None)` when no
    /// slide is open.
    pub async fn save_slide(&mut self, input: &UpdateSlide) -> Result<Option<Slide>, ClientError> {
        let View::SlideEditor { slide, .. } = &self.view else {
            return Ok(None);
        };
        let slide_id = slide.id;
        let saved = self
            .service
            .update_slide(slide_id, input)
            .await
            .inspect_err(|e| tracing::warn!(slide_id, error = %e, "Failed to save slide"))?;
        if let View::SlideEditor { slide, .. } = &mut self.view {
            *slide = saved.clone();
        }
        Ok(Some(saved))
    }

    /// Fetch the deck with its slides and switch to the presentation view.
    ///
    /// Always refetches. If the fetch fails or the deck is gone, the
    /// current view is kept and `false` is returned.
    pub async fn start_presentation(&mut self, deck_id: DbId) -> bool {
        match self.service.get_deck_with_slides(deck_id).await {
            Ok(Some(deck)) => {
                tracing::debug!(deck_id, slides = deck.slides.len(), "Presentation started");
                self.view = View::Presentation(Playback::new(deck));
                true
            }
            Ok(None) => {
                tracing::warn!(deck_id, "Deck not found, staying on current view");
                false
            }
            Err(e) => {
                tracing::warn!(deck_id, error = %e, "Failed to load presentation");
                false
            }
        }
    }

    /// Route a key press to the presentation. Ignored in other views.
    pub fn handle_key(&mut self, key: Key) {
        if let Some(command) = Command::from_key(key) {
            self.apply(command);
        }
    }

    /// Route a click on a surface `width` wide to the presentation.
    pub fn handle_click(&mut self, x: f64, width: f64) {
        if let Some(command) = Command::from_click(x, width) {
            self.apply(command);
        }
    }

    /// Leave the presentation for the presented deck's editor.
    pub fn exit_presentation(&mut self) {
        if let View::Presentation(playback) = &self.view {
            let deck = playback.deck().deck.clone();
            self.view = View::DeckEditor { deck };
        }
    }

    fn apply(&mut self, command: Command) {
        let View::Presentation(playback) = &mut self.view else {
            return;
        };
        match command {
            Command::Previous => playback.previous(),
            Command::Next => playback.next(),
            Command::Exit => self.exit_presentation(),
        }
    }
}
