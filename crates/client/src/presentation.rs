//! Presentation playback: the current slide index and the input bindings
//! that move it.
//!
//! Everything here is local. Once a [`Playback`] holds its
//! [`DeckWithSlides`], navigating never touches the network.

use slidedeck_db::models::deck::DeckWithSlides;
use slidedeck_db::models::slide::Slide;

/// Keys the presentation view reacts to. Anything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
    Other,
}

/// A navigation request produced by a key press or a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    Exit,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Left | Key::Up => Some(Self::Previous),
            Key::Right | Key::Down | Key::Space => Some(Self::Next),
            Key::Escape => Some(Self::Exit),
            Key::Other => None,
        }
    }

    /// Map a click at horizontal offset `x` on a surface `width` wide.
    ///
    /// The left third goes back, the right third goes forward, and the
    /// middle third does nothing. Offsets outside the surface are ignored.
    pub fn from_click(x: f64, width: f64) -> Option<Self> {
        if width.is_nan() || width <= 0.0 || !(0.0..=width).contains(&x) {
            return None;
        }
        let third = width / 3.0;
        if x < third {
            Some(Self::Previous)
        } else if x > width - third {
            Some(Self::Next)
        } else {
            None
        }
    }
}

/// A deck being presented and the index of the slide on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    deck: DeckWithSlides,
    index: usize,
}

impl Playback {
    /// Start at the first slide.
    pub fn new(deck: DeckWithSlides) -> Self {
        Self { deck, index: 0 }
    }

    pub fn deck(&self) -> &DeckWithSlides {
        &self.deck
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.deck.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.slides.is_empty()
    }

    /// The slide on screen, or `None` for a deck without slides.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.slides.get(self.index)
    }

    /// Whether previous/next have anything to move between.
    pub fn can_navigate(&self) -> bool {
        self.len() > 1
    }

    /// `"Slide 2 of 5"`, or `None` for a deck without slides.
    pub fn position_label(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("Slide {} of {}", self.index + 1, self.len()))
    }

    /// Advance, wrapping from the last slide to the first.
    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.len();
    }

    /// Step back, wrapping from the first slide to the last.
    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = if self.index == 0 {
            self.len() - 1
        } else {
            self.index - 1
        };
    }
}
