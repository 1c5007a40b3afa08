//! Handlers for the `/decks` resource.
//!
//! Lookups of a missing deck are not errors here: `get_by_id` and
//! `get_with_slides` answer `null`, `list_slides` answers `[]`, and
//! `delete` reports success either way.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use slidedeck_core::deck::DECK_ENTITY;
use slidedeck_core::error::CoreError;
use slidedeck_core::types::DbId;
use slidedeck_db::models::deck::{CreateDeck, Deck, DeckWithSlides, UpdateDeck};
use slidedeck_db::models::slide::Slide;
use slidedeck_db::repositories::{DeckRepo, SlideRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/v1/decks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Deck>>> {
    let decks = DeckRepo::list(&state.pool).await?;
    Ok(Json(decks))
}

/// GET /api/v1/decks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Option<Deck>>> {
    let deck = DeckRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(deck))
}

/// POST /api/v1/decks
///
/// Also seeds the deck's default first slide.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDeck>,
) -> AppResult<(StatusCode, Json<Deck>)> {
    input.validate().map_err(CoreError::from)?;

    let deck = DeckRepo::create(&state.pool, &input).await?;

    tracing::info!(deck_id = deck.id, "Deck created");

    Ok((StatusCode::CREATED, Json(deck)))
}

/// PUT /api/v1/decks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDeck>,
) -> AppResult<Json<Deck>> {
    input.validate().map_err(CoreError::from)?;

    let deck = DeckRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: DECK_ENTITY,
            id,
        }))?;

    tracing::info!(deck_id = id, "Deck renamed");

    Ok(Json(deck))
}

/// DELETE /api/v1/decks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let removed = DeckRepo::delete(&state.pool, id).await?;

    tracing::info!(deck_id = id, removed, "Deck deleted");

    Ok(Json(SuccessResponse::ok()))
}

/// GET /api/v1/decks/{id}/slides
pub async fn list_slides(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Slide>>> {
    let slides = SlideRepo::list_by_deck(&state.pool, id).await?;
    Ok(Json(slides))
}

/// GET /api/v1/decks/{id}/presentation
///
/// Deck plus every slide in order, for the presentation view.
pub async fn get_with_slides(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Option<DeckWithSlides>>> {
    let deck = DeckRepo::find_with_slides(&state.pool, id).await?;
    Ok(Json(deck))
}
