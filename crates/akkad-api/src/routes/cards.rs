//! Routes for browsing the card catalog.

use akkad_content::image::image_url;
use akkad_content::{Card, CardIndex, SuitInfo};
use akkad_core::error::DomainError;
use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for GET /cards/{index}.
#[derive(Debug, Serialize)]
pub struct CardResponse {
    /// The catalog entry.
    pub card: Card,
    /// Descriptive text of its suit.
    pub suit: &'static SuitInfo,
    /// Artwork location.
    pub image_url: String,
}

/// GET /cards/{index}
async fn get_card(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<CardResponse>, ApiError> {
    let index = raw
        .parse::<i64>()
        .map_err(|_| DomainError::Validation(format!("card index must be an integer: {raw}")))?;
    let index = CardIndex::new(index)?;
    let card = state.catalog.card(index).clone();
    Ok(Json(CardResponse {
        suit: card.suit.info(),
        image_url: image_url(index),
        card,
    }))
}

/// Returns the router for the card catalog.
pub fn router() -> Router<AppState> {
    Router::new().route("/cards/{index}", get(get_card))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use akkad_deck::{Deck, DeckConfig};
    use akkad_test_support::{MemoryStore, MockRng, test_catalog};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app_state() -> AppState {
        let catalog = Arc::new(test_catalog());
        let deck = Deck::from_serialized(
            None,
            Arc::clone(&catalog),
            Arc::new(MemoryStore::new()),
            Box::new(MockRng),
            DeckConfig::default(),
        );
        AppState::new(catalog, deck)
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = router().with_state(test_app_state());
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_card_returns_card_suit_and_image() {
        let (status, json) = get("/cards/75").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["card"]["index"], 75);
        assert_eq!(json["card"]["suit"], "black");
        assert_eq!(json["card"]["name"], "black 1");
        assert_eq!(json["suit"]["name"], "Black: The Divider");
        assert!(json["suit"]["interpretation"].is_string());
        assert!(
            json["image_url"]
                .as_str()
                .unwrap()
                .ends_with("pod-page152.png")
        );
    }

    #[tokio::test]
    async fn test_get_card_out_of_range_returns_400() {
        let (status, json) = get("/cards/90").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_get_card_non_numeric_returns_400() {
        let (status, json) = get("/cards/ace").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
        assert_eq!(
            json["message"],
            "validation error: card index must be an integer: ace"
        );
    }
}
