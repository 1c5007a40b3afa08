//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Callers own the pool, so
//! tests can point each repository call at an isolated database.

pub mod deck_repo;
pub mod slide_repo;

pub use deck_repo::DeckRepo;
pub use slide_repo::SlideRepo;
