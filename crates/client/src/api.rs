//! REST client for the slide-deck server.
//!
//! Wraps every `/api/v1` endpoint using [`reqwest`]. Paths and payloads
//! mirror the server's DTOs in `slidedeck_db::models`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use slidedeck_core::types::DbId;
use slidedeck_db::models::deck::{CreateDeck, Deck, DeckWithSlides, UpdateDeck};
use slidedeck_db::models::slide::{CreateSlide, Slide, UpdateSlide};

/// HTTP client for one slide-deck server.
#[derive(Debug, Clone)]
pub struct DeckApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the client API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body, usually `{"error", "code"}` JSON.
        body: String,
    },
}

#[derive(Deserialize)]
struct SuccessBody {
    #[allow(dead_code)]
    success: bool,
}

impl DeckApi {
    /// Create a client for a server.
    ///
    /// * `api_url` - Base URL including the API prefix, e.g.
    ///   `http://localhost:3000/api/v1`. A trailing slash is ignored.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET /decks`
    pub async fn list_decks(&self) -> Result<Vec<Deck>, ClientError> {
        let response = self.client.get(self.url("/decks")).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /decks/{id}`. `None` when the deck does not exist.
    pub async fn get_deck(&self, id: DbId) -> Result<Option<Deck>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/decks/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /decks`. The server also seeds the deck's first slide.
    pub async fn create_deck(&self, input: &CreateDeck) -> Result<Deck, ClientError> {
        let response = self
            .client
            .post(self.url("/decks"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /decks/{id}`
    pub async fn update_deck(&self, id: DbId, input: &UpdateDeck) -> Result<Deck, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/decks/{id}")))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /decks/{id}`
    pub async fn delete_deck(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/decks/{id}")))
            .send()
            .await?;
        Self::parse_response::<SuccessBody>(response).await?;
        Ok(())
    }

    /// `GET /decks/{id}/slides`
    pub async fn list_slides(&self, deck_id: DbId) -> Result<Vec<Slide>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/decks/{deck_id}/slides")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /decks/{id}/presentation`. `None` when the deck does not exist.
    pub async fn get_deck_with_slides(
        &self,
        id: DbId,
    ) -> Result<Option<DeckWithSlides>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/decks/{id}/presentation")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /slides`
    pub async fn create_slide(&self, input: &CreateSlide) -> Result<Slide, ClientError> {
        let response = self
            .client
            .post(self.url("/slides"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PATCH /slides/{id}`. Unset fields are left out of the body.
    pub async fn update_slide(&self, id: DbId, input: &UpdateSlide) -> Result<Slide, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("/slides/{id}")))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /slides/{id}`
    pub async fn delete_slide(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/slides/{id}")))
            .send()
            .await?;
        Self::parse_response::<SuccessBody>(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    /// Return the response unchanged on a 2xx status, otherwise a
    /// [`ClientError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = DeckApi::new("http://localhost:3000/api/v1/");
        assert_eq!(api.api_url(), "http://localhost:3000/api/v1");
        assert_eq!(api.url("/decks/3"), "http://localhost:3000/api/v1/decks/3");
    }

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = ClientError::Api {
            status: 404,
            body: r#"{"error":"Slide with id 9 not found","code":"NOT_FOUND"}"#.into(),
        };
        let text = err.to_string();
        assert!(text.starts_with("API error (404)"));
        assert!(text.contains("Slide with id 9 not found"));
    }
}
