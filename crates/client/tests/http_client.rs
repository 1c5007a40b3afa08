//! `DeckApi` against the real router served on a loopback port.

use std::sync::Arc;

use assert_matches::assert_matches;
use slidedeck_api::config::ServerConfig;
use slidedeck_api::router::build_app_router;
use slidedeck_api::state::AppState;
use slidedeck_client::{ClientError, DeckApi};
use slidedeck_core::field_update::FieldUpdate;
use slidedeck_db::models::deck::{CreateDeck, UpdateDeck};
use slidedeck_db::models::slide::{CreateSlide, UpdateSlide};
use sqlx::PgPool;

/// Serve the full router on `127.0.0.1:0` and point a client at it.
async fn spawn_server(pool: PgPool) -> DeckApi {
    let state = AppState {
        pool,
        config: Arc::new(ServerConfig::from_lookup(|_| None)),
    };
    let app = build_app_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    DeckApi::new(format!("http://{addr}/api/v1"))
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deck_round_trip(pool: PgPool) {
    let api = spawn_server(pool).await;

    let deck = api
        .create_deck(&CreateDeck {
            name: "Demo".into(),
        })
        .await
        .unwrap();
    assert_eq!(deck.name, "Demo");

    let slides = api.list_slides(deck.id).await.unwrap();
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].title, "First Slide");
    assert_eq!(slides[0].slide_order, 1);

    let fetched = api.get_deck(deck.id).await.unwrap();
    assert_eq!(fetched, Some(deck.clone()));

    let renamed = api
        .update_deck(
            deck.id,
            &UpdateDeck {
                name: "Renamed".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Renamed");

    let listed = api.list_decks().await.unwrap();
    assert_eq!(listed, vec![renamed]);

    api.delete_deck(deck.id).await.unwrap();
    assert!(api.list_decks().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_lookups_decode_as_none(pool: PgPool) {
    let api = spawn_server(pool).await;

    assert_eq!(api.get_deck(999_999).await.unwrap(), None);
    assert_eq!(api.get_deck_with_slides(999_999).await.unwrap(), None);
    assert!(api.list_slides(999_999).await.unwrap().is_empty());
    api.delete_deck(999_999).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_sends_only_provided_fields(pool: PgPool) {
    let api = spawn_server(pool).await;
    let deck = api
        .create_deck(&CreateDeck {
            name: "Demo".into(),
        })
        .await
        .unwrap();
    let slide = api
        .create_slide(&CreateSlide {
            deck_id: deck.id,
            title: "Intro".into(),
            body_text: Some("Hello".into()),
            image_url: Some("http://img/1.png".into()),
            slide_order: 2,
        })
        .await
        .unwrap();

    // Absent keys leave the stored values alone.
    let retitled = api
        .update_slide(
            slide.id,
            &UpdateSlide {
                title: Some("Introduction".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(retitled.title, "Introduction");
    assert_eq!(retitled.body_text.as_deref(), Some("Hello"));
    assert_eq!(retitled.image_url.as_deref(), Some("http://img/1.png"));
    assert_eq!(retitled.slide_order, 2);

    // `Clear` goes out as `null` and clears only that column.
    let cleared = api
        .update_slide(
            slide.id,
            &UpdateSlide {
                body_text: FieldUpdate::Clear,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.body_text, None);
    assert_eq!(cleared.image_url.as_deref(), Some("http://img/1.png"));
    assert_eq!(cleared.title, "Introduction");

    let presented = api.get_deck_with_slides(deck.id).await.unwrap().unwrap();
    assert_eq!(presented.deck.id, deck.id);
    let titles: Vec<&str> = presented.slides.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["First Slide", "Introduction"]);

    api.delete_slide(slide.id).await.unwrap();
    assert_eq!(api.list_slides(deck.id).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn error_statuses_become_api_errors(pool: PgPool) {
    let api = spawn_server(pool).await;

    let missing_slide = api.delete_slide(999_999).await;
    assert_matches!(
        missing_slide,
        Err(ClientError::Api { status: 404, ref body }) if body.contains("Slide with id 999999 not found")
    );

    let orphan = api
        .create_slide(&CreateSlide {
            deck_id: 999_999,
            title: "Orphan".into(),
            body_text: None,
            image_url: None,
            slide_order: 1,
        })
        .await;
    assert_matches!(orphan, Err(ClientError::Api { status: 404, .. }));

    let invalid = api
        .create_deck(&CreateDeck {
            name: String::new(),
        })
        .await;
    assert_matches!(
        invalid,
        Err(ClientError::Api { status: 400, ref body }) if body.contains("VALIDATION_ERROR")
    );
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    // Bind then drop a listener so the port is closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = DeckApi::new(format!("http://{addr}/api/v1"));
    assert_matches!(api.list_decks().await, Err(ClientError::Request(_)));
}
