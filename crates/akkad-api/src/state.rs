//! Shared application state.

use std::sync::{Arc, Mutex};

use akkad_content::Catalog;
use akkad_core::error::DomainError;
use akkad_core::event::DomainEvent;
use akkad_deck::Deck;
use serde_json::Value;
use tracing::info;

/// Application state shared across all request handlers.
///
/// The deck is locked only for the synchronous deck call, never across an
/// await point, so each request runs to completion against the deck.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The card catalog, readable without locking the deck.
    pub catalog: Arc<Catalog>,
    deck: Arc<Mutex<Deck>>,
    /// Event payloads fired during the current deck call.
    outbox: Arc<Mutex<Vec<Value>>>,
}

fn record<E: DomainEvent>(outbox: &Arc<Mutex<Vec<Value>>>) -> impl FnMut(&E) + Send + 'static {
    let outbox = Arc::clone(outbox);
    move |event: &E| {
        info!(event_type = event.event_type(), "deck event");
        if let Ok(mut pending) = outbox.lock() {
            pending.push(event.to_payload());
        }
    }
}

impl AppState {
    /// Create new application state around `deck`, subscribing to its
    /// shuffle and lock events.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, mut deck: Deck) -> Self {
        let outbox = Arc::new(Mutex::new(Vec::new()));
        deck.on_shuffle(record(&outbox));
        deck.on_lock(record(&outbox));
        Self {
            catalog,
            deck: Arc::new(Mutex::new(deck)),
            outbox,
        }
    }

    /// Runs `f` against the deck and returns its result together with the
    /// event payloads fired meanwhile, in order.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or `DomainError::Infrastructure` if the
    /// deck mutex is poisoned.
    pub fn with_deck<T>(
        &self,
        f: impl FnOnce(&mut Deck) -> Result<T, DomainError>,
    ) -> Result<(T, Vec<Value>), DomainError> {
        let mut deck = self
            .deck
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("deck mutex poisoned: {e}")))?;
        let result = f(&mut deck);
        let events = self
            .outbox
            .lock()
            .map(|mut pending| std::mem::take(&mut *pending))
            .map_err(|e| DomainError::Infrastructure(format!("outbox mutex poisoned: {e}")))?;
        result.map(|value| (value, events))
    }
}
