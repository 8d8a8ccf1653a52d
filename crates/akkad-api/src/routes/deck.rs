//! Routes for the deck.

use akkad_deck::LockScope;
use akkad_deck::application::command_handlers;
use akkad_deck::application::query_handlers::{self, DeckView};
use akkad_deck::domain::commands::DeckCommand;
use axum::extract::{Path, State};
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for every deck route.
#[derive(Debug, Serialize)]
pub struct DeckResponse {
    /// The deck after the request.
    pub deck: DeckView,
    /// Shuffle and lock event payloads fired while handling the request.
    pub events: Vec<Value>,
}

fn run(state: &AppState, command: DeckCommand) -> Result<Json<DeckResponse>, ApiError> {
    info!(command_type = command.command_type(), "handling deck command");
    let (deck, events) =
        state.with_deck(|deck| command_handlers::handle_command(deck, &command))?;
    Ok(Json(DeckResponse { deck, events }))
}

/// GET /deck
#[instrument(skip(state))]
async fn get_deck(State(state): State<AppState>) -> Result<Json<DeckResponse>, ApiError> {
    let (deck, events) = state.with_deck(query_handlers::deck_view)?;
    Ok(Json(DeckResponse { deck, events }))
}

/// POST /deck/draw
#[instrument(skip(state))]
async fn draw(State(state): State<AppState>) -> Result<Json<DeckResponse>, ApiError> {
    run(&state, DeckCommand::Draw)
}

/// POST /deck/shuffle
#[instrument(skip(state))]
async fn shuffle(State(state): State<AppState>) -> Result<Json<DeckResponse>, ApiError> {
    run(&state, DeckCommand::Shuffle)
}

/// POST /deck/lock/{scope}
#[instrument(skip(state))]
async fn lock(
    State(state): State<AppState>,
    Path(scope): Path<String>,
) -> Result<Json<DeckResponse>, ApiError> {
    let scope: LockScope = scope.parse()?;
    run(&state, DeckCommand::Lock(scope))
}

/// POST /deck/refresh/{scope}
#[instrument(skip(state))]
async fn refresh(
    State(state): State<AppState>,
    Path(scope): Path<String>,
) -> Result<Json<DeckResponse>, ApiError> {
    let scope: LockScope = scope.parse()?;
    run(&state, DeckCommand::Refresh(scope))
}

/// Returns the router for the deck.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/deck", get(get_deck))
        .route("/deck/draw", post(draw))
        .route("/deck/shuffle", post(shuffle))
        .route("/deck/lock/{scope}", post(lock))
        .route("/deck/refresh/{scope}", post(refresh))
}
