//! Repository for the `slides` table.
//!
//! Every write here also touches the parent deck through
//! [`DeckRepo::touch`], inside the same transaction as the slide write.

use slidedeck_core::slide::normalize_optional_text;
use slidedeck_core::types::DbId;
use sqlx::PgPool;

use crate::models::slide::{CreateSlide, Slide, UpdateSlide};
use crate::repositories::deck_repo::NEXT_UPDATED_AT;
use crate::repositories::DeckRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, deck_id, title, body_text, image_url, slide_order, created_at, updated_at";

/// Provides CRUD operations for slides.
pub struct SlideRepo;

impl SlideRepo {
    /// Insert a new slide and touch its deck.
    ///
    /// The parent deck row is locked first; returns `None` without
    /// inserting anything if it does not exist.
    pub async fn create(pool: &PgPool, input: &CreateSlide) -> Result<Option<Slide>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deck_exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM decks WHERE id = $1 FOR UPDATE")
                .bind(input.deck_id)
                .fetch_optional(&mut *tx)
                .await?;
        if deck_exists.is_none() {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO slides (deck_id, title, body_text, image_url, slide_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let slide = sqlx::query_as::<_, Slide>(&query)
            .bind(input.deck_id)
            .bind(&input.title)
            .bind(normalize_optional_text(input.body_text.clone()))
            .bind(normalize_optional_text(input.image_url.clone()))
            .bind(input.slide_order)
            .fetch_one(&mut *tx)
            .await?;

        DeckRepo::touch(&mut *tx, slide.deck_id).await?;

        tx.commit().await?;
        Ok(Some(slide))
    }

    /// List a deck's slides ordered by `slide_order`, ties in insertion order.
    ///
    /// An unknown `deck_id` yields an empty list.
    pub async fn list_by_deck(pool: &PgPool, deck_id: DbId) -> Result<Vec<Slide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM slides
             WHERE deck_id = $1
             ORDER BY slide_order ASC, id ASC"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(deck_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update a slide and touch its deck.
    ///
    /// `title` and `slide_order` use `COALESCE`. `body_text` and
    /// `image_url` pass a "provided" flag plus the value, so an explicit
    /// clear is distinguishable from an omitted field. The slide's own
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSlide,
    ) -> Result<Option<Slide>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE slides SET
                title       = COALESCE($2, title),
                body_text   = CASE WHEN $3 THEN $4 ELSE body_text END,
                image_url   = CASE WHEN $5 THEN $6 ELSE image_url END,
                slide_order = COALESCE($7, slide_order),
                updated_at  = {NEXT_UPDATED_AT}
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let slide = sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.body_text.is_provided())
            .bind(input.body_text.value().map(String::as_str))
            .bind(input.image_url.is_provided())
            .bind(input.image_url.value().map(String::as_str))
            .bind(input.slide_order)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(slide) = slide else {
            return Ok(None);
        };

        DeckRepo::touch(&mut *tx, slide.deck_id).await?;

        tx.commit().await?;
        Ok(Some(slide))
    }

    /// Delete a slide by ID and touch its deck.
    ///
    /// Returns `false` if no such slide existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deck_id: Option<DbId> =
            sqlx::query_scalar("DELETE FROM slides WHERE id = $1 RETURNING deck_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(deck_id) = deck_id else {
            return Ok(false);
        };

        DeckRepo::touch(&mut *tx, deck_id).await?;

        tx.commit().await?;
        Ok(true)
    }
}
