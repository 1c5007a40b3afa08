pub mod deck;
pub mod health;
pub mod slide;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /decks                                  list, create
/// /decks/{id}                             get, update, delete
/// /decks/{id}/slides                      list slides in order
/// /decks/{id}/presentation                deck with all slides
///
/// /slides                                 create
/// /slides/{id}                            partial update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/decks", deck::router())
        .nest("/slides", slide::router())
}
