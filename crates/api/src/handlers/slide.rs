//! Handlers for the `/slides` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use slidedeck_core::deck::DECK_ENTITY;
use slidedeck_core::error::CoreError;
use slidedeck_core::slide::SLIDE_ENTITY;
use slidedeck_core::types::DbId;
use slidedeck_db::models::slide::{CreateSlide, Slide, UpdateSlide};
use slidedeck_db::repositories::SlideRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /api/v1/slides
///
/// Fails with 404 if `deck_id` does not reference an existing deck.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSlide>,
) -> AppResult<(StatusCode, Json<Slide>)> {
    input.validate().map_err(CoreError::from)?;

    let slide = SlideRepo::create(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: DECK_ENTITY,
            id: input.deck_id,
        }))?;

    tracing::info!(
        slide_id = slide.id,
        deck_id = slide.deck_id,
        slide_order = slide.slide_order,
        "Slide created"
    );

    Ok((StatusCode::CREATED, Json(slide)))
}

/// PATCH /api/v1/slides/{id}
///
/// Only keys present in the body are changed; `null` clears
/// `body_text` / `image_url`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSlide>,
) -> AppResult<Json<Slide>> {
    input.validate().map_err(CoreError::from)?;

    let slide = SlideRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: SLIDE_ENTITY,
            id,
        }))?;

    tracing::info!(slide_id = id, deck_id = slide.deck_id, "Slide updated");

    Ok(Json(slide))
}

/// DELETE /api/v1/slides/{id}
///
/// Unlike deck deletion, a missing slide is a 404.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = SlideRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: SLIDE_ENTITY,
            id,
        }));
    }

    tracing::info!(slide_id = id, "Slide deleted");

    Ok(Json(SuccessResponse::ok()))
}
