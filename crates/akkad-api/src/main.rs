//! Akkad deck API server entry point.

use std::error::Error;
use std::sync::Arc;

use akkad_content::application::loader::load_catalog;
use akkad_core::rng::StdRandom;
use akkad_deck::Deck;
use akkad_storage::FileStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use akkad_api::build_router;
use akkad_api::config::AppConfig;
use akkad_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Akkad deck server");

    let config = AppConfig::from_env()?;

    let catalog = Arc::new(load_catalog(&config.catalog_path)?);
    let store = Arc::new(FileStore::open(&config.state_dir)?);
    let deck = Deck::load(
        Arc::clone(&catalog),
        store,
        Box::new(StdRandom::from_os()),
        config.deck_config(),
    );
    let app_state = AppState::new(catalog, deck);

    let app = build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
