//! Command handlers for the deck context.
//!
//! Each handler runs one command against the deck, which persists and
//! notifies listeners itself, and returns the resulting view.

use akkad_core::error::DomainError;
use tracing::{info, instrument};

use crate::application::query_handlers::{DeckView, deck_view};
use crate::domain::commands::DeckCommand;
use crate::domain::deck::Deck;

/// Handles any `DeckCommand`.
///
/// A lock that finds no eligible card is not an error: the lock listeners
/// have been told, and the view is returned unchanged apart from the draws.
///
/// # Errors
///
/// Returns `DomainError` if the deck cannot be shuffled or persisted.
#[instrument(skip(deck), fields(command_type = command.command_type()))]
pub fn handle_command(deck: &mut Deck, command: &DeckCommand) -> Result<DeckView, DomainError> {
    match *command {
        DeckCommand::Shuffle => deck.shuffle()?,
        DeckCommand::Draw => {
            deck.next()?;
        }
        DeckCommand::Lock(scope) => {
            let locked = deck.lock(scope)?;
            info!(%scope, locked = ?locked.map(|index| index.get()), "lock handled");
        }
        DeckCommand::Refresh(scope) => deck.refresh(scope)?,
    }
    deck_view(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use akkad_test_support::{FailingStore, MemoryStore, MockRng, Recorder, test_catalog};

    use crate::domain::config::DeckConfig;
    use crate::domain::events::{LockEvent, LockScope, ShuffleEvent};

    fn fresh_deck() -> (Deck, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let deck = Deck::from_serialized(
            None,
            Arc::new(test_catalog()),
            store.clone(),
            Box::new(MockRng),
            DeckConfig::default(),
        );
        (deck, store)
    }

    #[test]
    fn test_handle_shuffle_persists() {
        let (mut deck, store) = fresh_deck();
        let shuffles = Recorder::new();
        deck.on_shuffle(shuffles.callback());

        let view = handle_command(&mut deck, &DeckCommand::Shuffle).unwrap();

        assert_eq!(view.remaining, 90);
        assert_eq!(view.top.unwrap().index, 89);
        assert_eq!(store.save_count(), 1);
        assert_eq!(
            shuffles.events(),
            vec![ShuffleEvent::Start, ShuffleEvent::Done]
        );
    }

    #[test]
    fn test_handle_draw_advances() {
        let (mut deck, _) = fresh_deck();
        handle_command(&mut deck, &DeckCommand::Shuffle).unwrap();

        let view = handle_command(&mut deck, &DeckCommand::Draw).unwrap();

        assert_eq!(view.top.as_ref().unwrap().index, 88);
        assert_eq!(view.remaining, 89);
        assert_eq!(view.discarded, 1);
    }

    #[test]
    fn test_handle_lock_then_refresh() {
        let (mut deck, _) = fresh_deck();
        let locks = Recorder::new();
        deck.on_lock(locks.callback());

        let locked = handle_command(&mut deck, &DeckCommand::Lock(LockScope::Act)).unwrap();
        assert_eq!(locked.locked.act, 1);
        assert_eq!(locked.refreshable.act, 1);

        let refreshed =
            handle_command(&mut deck, &DeckCommand::Refresh(LockScope::Session)).unwrap();
        assert_eq!(refreshed.locked.act, 1);

        let cleared = handle_command(&mut deck, &DeckCommand::Refresh(LockScope::Act)).unwrap();
        assert_eq!(cleared.locked.act, 0);

        assert_eq!(
            locks.events(),
            vec![
                LockEvent::updated(LockScope::Act),
                LockEvent::updated(LockScope::Session),
                LockEvent::updated(LockScope::Act),
            ]
        );
    }

    #[test]
    fn test_handle_lock_of_last_card_has_no_top() {
        let others: Vec<u8> = (1..90).collect();
        let document = serde_json::json!({
            "nextCards": [0],
            "nextUpside": true,
            "lockedAct": others,
            "lockedSession": [],
            "lockedScene": [],
        })
        .to_string();
        let mut deck = Deck::from_serialized(
            Some(&document),
            Arc::new(test_catalog()),
            Arc::new(MemoryStore::new()),
            Box::new(MockRng),
            DeckConfig::default(),
        );

        let view = handle_command(&mut deck, &DeckCommand::Lock(LockScope::Scene)).unwrap();

        assert_eq!(view.top, None);
        assert_eq!(view.locked.scene, 1);
        assert_eq!(view.locked.act, 89);
    }

    #[test]
    fn test_handle_propagates_storage_failure() {
        let mut deck = Deck::from_serialized(
            None,
            Arc::new(test_catalog()),
            Arc::new(FailingStore::always()),
            Box::new(MockRng),
            DeckConfig::default(),
        );
        let result = handle_command(&mut deck, &DeckCommand::Draw);
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
