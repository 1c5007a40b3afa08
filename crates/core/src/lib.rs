//! Shared domain types for the slide deck service.
//!
//! Holds the primitive id/timestamp aliases, the [`error::CoreError`]
//! taxonomy, deck and slide rules, and the tri-state
//! [`field_update::FieldUpdate`] used by partial updates. Nothing here
//! performs I/O.

pub mod deck;
pub mod error;
pub mod field_update;
pub mod slide;
pub mod types;
