//! Repository for the `decks` table.

use slidedeck_core::deck::{DEFAULT_SLIDE_ORDER, DEFAULT_SLIDE_TITLE};
use slidedeck_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::deck::{CreateDeck, Deck, DeckWithSlides, UpdateDeck};
use crate::repositories::SlideRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// SQL expression for a refreshed `updated_at`.
///
/// Never moves backwards and always advances by at least a microsecond,
/// so two writes inside one clock tick still order correctly.
pub(crate) const NEXT_UPDATED_AT: &str =
    "GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')";

/// Provides CRUD operations for decks.
pub struct DeckRepo;

impl DeckRepo {
    /// Insert a new deck together with its default first slide.
    ///
    /// Both rows are written in one transaction, so a deck created here is
    /// never observable without a slide. Returns the deck row only.
    pub async fn create(pool: &PgPool, input: &CreateDeck) -> Result<Deck, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("INSERT INTO decks (name) VALUES ($1) RETURNING {COLUMNS}");
        let deck = sqlx::query_as::<_, Deck>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO slides (deck_id, title, body_text, image_url, slide_order)
             VALUES ($1, $2, NULL, NULL, $3)",
        )
        .bind(deck.id)
        .bind(DEFAULT_SLIDE_TITLE)
        .bind(DEFAULT_SLIDE_ORDER)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(deck)
    }

    /// Find a deck by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Deck>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM decks WHERE id = $1");
        sqlx::query_as::<_, Deck>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all decks, most recently touched first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Deck>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM decks ORDER BY updated_at DESC, id DESC");
        sqlx::query_as::<_, Deck>(&query).fetch_all(pool).await
    }

    /// Rename a deck and refresh its `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDeck,
    ) -> Result<Option<Deck>, sqlx::Error> {
        let query = format!(
            "UPDATE decks SET
                name = $2,
                updated_at = {NEXT_UPDATED_AT}
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deck>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a deck by ID. Its slides go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed. Callers treat a missing deck
    /// as already deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM decks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Refresh a deck's `updated_at` after one of its slides changed.
    ///
    /// Accepts any executor so slide writes can touch the parent inside
    /// their own transaction. Returns `true` if the deck exists.
    pub async fn touch<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("UPDATE decks SET updated_at = {NEXT_UPDATED_AT} WHERE id = $1");
        let result = sqlx::query(&query).bind(id).execute(executor).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a deck by ID together with its slides in presentation order.
    ///
    /// Returns `None` if the deck does not exist.
    pub async fn find_with_slides(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DeckWithSlides>, sqlx::Error> {
        let Some(deck) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let slides = SlideRepo::list_by_deck(pool, deck.id).await?;
        Ok(Some(DeckWithSlides { deck, slides }))
    }
}
