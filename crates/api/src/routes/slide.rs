//! Route definitions for the `/slides` resource.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::slide;
use crate::state::AppState;

/// Routes mounted at `/slides`.
///
/// ```text
/// POST   /        -> create
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(slide::create))
        .route("/{id}", patch(slide::update).delete(slide::delete))
}
