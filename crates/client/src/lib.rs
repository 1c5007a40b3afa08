//! Client side of the slide-deck editor.
//!
//! [`api::DeckApi`] talks to the HTTP server, [`service::DeckService`]
//! abstracts it, and [`app::App`] is the view state machine driving the
//! list, editor and presentation screens.

pub mod api;
pub mod app;
pub mod presentation;
pub mod service;

pub use api::{ClientError, DeckApi};
pub use app::{App, View};
pub use presentation::{Command, Key, Playback};
pub use service::DeckService;
