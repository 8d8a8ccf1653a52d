//! Akkad deck HTTP surface.
//!
//! Owns the single deck of the process and exposes it over a small JSON API,
//! standing in for the browser front end.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the full application router. Uses the same route structure in
/// `main.rs` and in tests.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest(
            "/api/v1",
            routes::deck::router().merge(routes::cards::router()),
        )
        .with_state(app_state)
}
