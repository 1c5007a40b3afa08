//! Route definitions for the `/decks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::deck;
use crate::state::AppState;

/// Routes mounted at `/decks`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/slides         -> list_slides
/// GET    /{id}/presentation   -> get_with_slides
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(deck::list).post(deck::create))
        .route(
            "/{id}",
            get(deck::get_by_id).put(deck::update).delete(deck::delete),
        )
        .route("/{id}/slides", get(deck::list_slides))
        .route("/{id}/presentation", get(deck::get_with_slides))
}
