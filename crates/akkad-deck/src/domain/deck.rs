//! The deck state machine.
//!
//! A deck is either empty (waiting for its first shuffle) or holds a pile of
//! every card that is neither locked nor drawn since the last shuffle. The
//! top of the pile is shown with `top()`; `next()` discards it and reveals
//! the following one, reshuffling once more than half of the unlocked cards
//! have been drawn.

use std::collections::BTreeSet;
use std::sync::Arc;

use akkad_content::{Card, CardIndex, Catalog, NUMBER_OF_CARDS};
use akkad_core::error::DomainError;
use akkad_core::event::Listeners;
use akkad_core::rng::DeterministicRng;
use akkad_core::storage::StateStore;
use tracing::{debug, info, warn};

use super::config::DeckConfig;
use super::events::{LockEvent, LockScope, ShuffleEvent};
use super::snapshot::DeckSnapshot;
use super::state::DeckState;

/// A card together with the orientation it was drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawn {
    /// The card.
    pub card: Card,
    /// `true` if the card is upright, `false` if reversed.
    pub upright: bool,
}

/// The deck, with its storage, catalog and randomness injected.
pub struct Deck {
    state: DeckState,
    catalog: Arc<Catalog>,
    store: Arc<dyn StateStore>,
    rng: Box<dyn DeterministicRng>,
    config: DeckConfig,
    shuffle_listeners: Listeners<ShuffleEvent>,
    lock_listeners: Listeners<LockEvent>,
}

impl std::fmt::Debug for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("shuffle_listeners", &self.shuffle_listeners)
            .field("lock_listeners", &self.lock_listeners)
            .finish_non_exhaustive()
    }
}

/// Rebuilds deck fields from a persisted document, falling back to an empty
/// deck on any error.
fn restore(document: &str) -> DeckState {
    debug!("attempting to deserialize deck");
    match DeckSnapshot::parse(document).and_then(DeckState::try_from) {
        Ok(state) => {
            debug!(
                remaining = state.next_cards.len(),
                locked = state.total_locked(),
                "deck deserialized"
            );
            state
        }
        Err(error) => {
            debug!(%error, "invalid serialized deck, starting from scratch");
            DeckState::empty()
        }
    }
}

/// Fisher–Yates: position `i` swaps with a uniform position in `[i, n)`.
#[allow(clippy::cast_possible_truncation)]
fn shuffle_in_place(cards: &mut [CardIndex], rng: &mut dyn DeterministicRng) {
    let last = cards.len().saturating_sub(1) as u32;
    for i in 0..cards.len() {
        let j = rng.next_u32_range(i as u32, last) as usize;
        cards.swap(i, j);
    }
}

impl Deck {
    /// Loads the deck persisted under `config.storage_key`, or starts an
    /// empty one if nothing usable is stored. Never fails: an unreadable
    /// store or a corrupt document is logged and ignored.
    #[must_use]
    pub fn load(
        catalog: Arc<Catalog>,
        store: Arc<dyn StateStore>,
        rng: Box<dyn DeterministicRng>,
        config: DeckConfig,
    ) -> Self {
        let document = match store.load(&config.storage_key) {
            Ok(document) => document,
            Err(error) => {
                warn!(%error, key = %config.storage_key, "cannot read stored deck");
                None
            }
        };
        Self::from_serialized(document.as_deref(), catalog, store, rng, config)
    }

    /// Builds a deck from an optional persisted document. A missing or
    /// invalid document yields an empty deck that shuffles on first use.
    #[must_use]
    pub fn from_serialized(
        serialized: Option<&str>,
        catalog: Arc<Catalog>,
        store: Arc<dyn StateStore>,
        rng: Box<dyn DeterministicRng>,
        config: DeckConfig,
    ) -> Self {
        let state = match serialized {
            Some(document) => restore(document),
            None => {
                debug!("initializing deck from scratch");
                DeckState::empty()
            }
        };
        Self {
            state,
            catalog,
            store,
            rng,
            config,
            shuffle_listeners: Listeners::new(),
            lock_listeners: Listeners::new(),
        }
    }

    /// Registers a shuffle listener.
    pub fn on_shuffle<F>(&mut self, callback: F)
    where
        F: FnMut(&ShuffleEvent) + Send + 'static,
    {
        self.shuffle_listeners.subscribe(callback);
    }

    /// Registers a lock listener.
    pub fn on_lock<F>(&mut self, callback: F)
    where
        F: FnMut(&LockEvent) + Send + 'static,
    {
        self.lock_listeners.subscribe(callback);
    }

    /// Rebuilds the pile from every unlocked card, in random order, with a
    /// random orientation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ExhaustedPool` if every card is locked, an
    /// invariant error if the new pile is inconsistent, or a storage error.
    /// Shuffle listeners receive `Failed` before any error is returned, and
    /// the deck keeps its previous pile.
    pub fn shuffle(&mut self) -> Result<(), DomainError> {
        self.shuffle_listeners.emit(&ShuffleEvent::Start);

        let mut cards: Vec<CardIndex> = CardIndex::all()
            .filter(|&index| !self.state.is_locked(index))
            .collect();
        debug!(eligible = cards.len(), "shuffling");
        if cards.is_empty() {
            let error = DomainError::ExhaustedPool;
            self.shuffle_listeners.emit(&ShuffleEvent::failed(&error));
            return Err(error);
        }

        shuffle_in_place(&mut cards, self.rng.as_mut());
        let candidate = DeckState {
            next_cards: cards,
            next_upside: self.rng.coin_flip(),
            ..self.state.clone()
        };
        if let Err(error) = candidate.check(true) {
            warn!(%error, "shuffle produced an inconsistent deck");
            self.shuffle_listeners.emit(&ShuffleEvent::failed(&error));
            return Err(error);
        }

        if let Err(error) = self.commit(candidate) {
            self.shuffle_listeners.emit(&ShuffleEvent::failed(&error));
            return Err(error);
        }
        self.shuffle_listeners.emit(&ShuffleEvent::Done);
        Ok(())
    }

    /// The card currently on top of the pile, without drawing it. Shuffles
    /// first if the pile is empty.
    ///
    /// # Errors
    ///
    /// Returns any error from the implied shuffle.
    pub fn top(&mut self) -> Result<Drawn, DomainError> {
        if self.state.next_cards.is_empty() {
            self.shuffle()?;
        }
        let index = *self
            .state
            .next_cards
            .last()
            .ok_or(DomainError::ExhaustedPool)?;
        Ok(Drawn {
            card: self.catalog.card(index).clone(),
            upright: self.state.next_upside,
        })
    }

    /// Discards the top card and returns the one beneath it, with a fresh
    /// orientation.
    ///
    /// Reshuffles once the pile is smaller than half of the unlocked cards.
    ///
    /// # Errors
    ///
    /// Returns any error from the reshuffle or from persisting, in which
    /// case the top card is not discarded. Returns
    /// `DomainError::ExhaustedPool` after the draw is saved if the pile ran
    /// out while every other card is locked.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Drawn, DomainError> {
        let mut candidate = self.state.clone();
        // The discarded card was already shown by `top()`.
        candidate.next_cards.pop();
        let remaining = candidate.next_cards.len();
        let unlocked = NUMBER_OF_CARDS.saturating_sub(candidate.total_locked());
        debug!(remaining, unlocked, "card drawn");
        if remaining * 2 < unlocked {
            self.shuffle()?;
            candidate = self.state.clone();
        }
        candidate.next_upside = self.rng.coin_flip();
        self.commit(candidate)?;
        self.top()
    }

    /// Draws until a card outside the excluded suit comes up, locks it for
    /// `scope`, then draws once more so a fresh card is on top.
    ///
    /// Returns the locked card, or `None` if no eligible card came up within
    /// `DeckConfig::lock_attempts` draws; lock listeners receive `Updated`
    /// or `Failed` accordingly. Locking the last unlocked card succeeds even
    /// though no card is left to show afterwards.
    ///
    /// # Errors
    ///
    /// Returns any other error from drawing.
    pub fn lock(&mut self, scope: LockScope) -> Result<Option<CardIndex>, DomainError> {
        for attempt in 0..self.config.lock_attempts {
            let drawn = self.next()?;
            if drawn.card.suit == self.config.excluded_suit {
                debug!(%scope, attempt, index = %drawn.card.index, "skipping excluded card");
                continue;
            }
            let index = drawn.card.index;
            self.state.locked_mut(scope).insert(index);
            match self.next() {
                Ok(_) | Err(DomainError::ExhaustedPool) => {}
                Err(error) => return Err(error),
            }
            info!(%scope, %index, "card locked");
            self.lock_listeners.emit(&LockEvent::updated(scope));
            return Ok(Some(index));
        }
        warn!(%scope, attempts = self.config.lock_attempts, "no eligible card to lock");
        self.lock_listeners.emit(&LockEvent::failed(scope));
        Ok(None)
    }

    /// Locks a card for the current scene.
    ///
    /// # Errors
    ///
    /// See [`Deck::lock`].
    pub fn lock_scene(&mut self) -> Result<Option<CardIndex>, DomainError> {
        self.lock(LockScope::Scene)
    }

    /// Locks a card for the current session.
    ///
    /// # Errors
    ///
    /// See [`Deck::lock`].
    pub fn lock_session(&mut self) -> Result<Option<CardIndex>, DomainError> {
        self.lock(LockScope::Session)
    }

    /// Locks a card for the current act.
    ///
    /// # Errors
    ///
    /// See [`Deck::lock`].
    pub fn lock_act(&mut self) -> Result<Option<CardIndex>, DomainError> {
        self.lock(LockScope::Act)
    }

    /// Releases the cards locked for `scope` and every scope nested in it.
    /// They rejoin the pile at the next shuffle.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the deck cannot be persisted.
    pub fn refresh(&mut self, scope: LockScope) -> Result<(), DomainError> {
        let mut candidate = self.state.clone();
        for &nested in scope.nested() {
            candidate.locked_mut(nested).clear();
        }
        self.commit(candidate)?;
        info!(%scope, "locks refreshed");
        self.lock_listeners.emit(&LockEvent::updated(scope));
        Ok(())
    }

    /// Starts a new scene.
    ///
    /// # Errors
    ///
    /// See [`Deck::refresh`].
    pub fn refresh_scene(&mut self) -> Result<(), DomainError> {
        self.refresh(LockScope::Scene)
    }

    /// Starts a new session, which also starts a new scene.
    ///
    /// # Errors
    ///
    /// See [`Deck::refresh`].
    pub fn refresh_session(&mut self) -> Result<(), DomainError> {
        self.refresh(LockScope::Session)
    }

    /// Starts a new act, which also starts a new session and scene.
    ///
    /// # Errors
    ///
    /// See [`Deck::refresh`].
    pub fn refresh_act(&mut self) -> Result<(), DomainError> {
        self.refresh(LockScope::Act)
    }

    /// Verifies that no card is held twice and, when `expect_full`, that
    /// every card is either in the pile or locked.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateCard` or `DomainError::MissingCards`.
    pub fn check(&self, expect_full: bool) -> Result<(), DomainError> {
        self.state.check(expect_full)
    }

    /// The persisted form of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot::from(&self.state)
    }

    /// The draw pile, top card last.
    #[must_use]
    pub fn next_cards(&self) -> &[CardIndex] {
        &self.state.next_cards
    }

    /// Orientation of the top card.
    #[must_use]
    pub fn next_upside(&self) -> bool {
        self.state.next_upside
    }

    /// Cards locked for `scope`.
    #[must_use]
    pub fn locked(&self, scope: LockScope) -> &BTreeSet<CardIndex> {
        self.state.locked(scope)
    }

    /// Number of cards locked for `scope`.
    #[must_use]
    pub fn locked_count(&self, scope: LockScope) -> usize {
        self.state.locked(scope).len()
    }

    /// Cards locked across all scopes.
    #[must_use]
    pub fn total_locked(&self) -> usize {
        self.state.total_locked()
    }

    /// Cards left in the pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.state.next_cards.len()
    }

    /// Cards drawn since the last shuffle.
    #[must_use]
    pub fn discarded(&self) -> usize {
        NUMBER_OF_CARDS.saturating_sub(self.remaining() + self.total_locked())
    }

    /// The catalog cards are looked up in.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Persists `state`, then makes it current.
    fn commit(&mut self, state: DeckState) -> Result<(), DomainError> {
        let document = DeckSnapshot::from(&state).to_json()?;
        self.store.save(&self.config.storage_key, &document)?;
        self.state = state;
        Ok(())
    }
}
