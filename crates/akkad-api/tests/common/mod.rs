//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use akkad_core::rng::DeterministicRng;
use akkad_core::storage::StateStore;
use akkad_deck::{Deck, DeckConfig};
use akkad_test_support::{MemoryStore, MockRng, test_catalog};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use akkad_api::build_router;
use akkad_api::state::AppState;

/// Build the full app router around a deck loaded from `store`. Uses the
/// same route structure as `main.rs`. Clone the router to send several
/// requests against the same deck.
pub fn build_test_app_with(store: Arc<dyn StateStore>, rng: Box<dyn DeterministicRng>) -> Router {
    let catalog = Arc::new(test_catalog());
    let deck = Deck::load(Arc::clone(&catalog), store, rng, DeckConfig::default());
    build_router(AppState::new(catalog, deck))
}

/// Build the app with an empty in-memory store and `MockRng`, whose shuffle
/// leaves the pile in ascending order with card 89 on top.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryStore::new()), Box::new(MockRng))
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a bodyless POST request and return the response.
pub async fn post(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "POST", uri).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", uri).await
}
