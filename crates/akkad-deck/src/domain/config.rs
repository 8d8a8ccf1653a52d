//! Deck configuration.

use akkad_content::{NUMBER_OF_CARDS, SuitKey};

/// Storage key under which the deck is persisted by default.
pub const DEFAULT_STORAGE_KEY: &str = "deck";

/// Tunables for a `Deck`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Key of the persisted document.
    pub storage_key: String,
    /// Draws attempted by a lock before giving up. The default covers one
    /// pass through the whole deck.
    pub lock_attempts: usize,
    /// Suit that can never be locked.
    pub excluded_suit: SuitKey,
}

impl DeckConfig {
    /// Overrides the lock retry cap.
    #[must_use]
    pub fn with_lock_attempts(mut self, lock_attempts: usize) -> Self {
        self.lock_attempts = lock_attempts;
        self
    }

    /// Overrides the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            lock_attempts: NUMBER_OF_CARDS,
            excluded_suit: SuitKey::Black,
        }
    }
}
