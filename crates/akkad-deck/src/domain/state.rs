//! In-memory deck fields and their invariants.

use std::collections::{BTreeSet, HashSet};

use akkad_content::{CardIndex, NUMBER_OF_CARDS};
use akkad_core::error::DomainError;

use super::events::LockScope;

/// The mutable fields of a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeckState {
    /// Remaining draw pile; the top card is the last element.
    pub next_cards: Vec<CardIndex>,
    /// Orientation of the top card.
    pub next_upside: bool,
    pub locked_act: BTreeSet<CardIndex>,
    pub locked_session: BTreeSet<CardIndex>,
    pub locked_scene: BTreeSet<CardIndex>,
}

impl DeckState {
    /// An empty pile with nothing locked, waiting for its first shuffle.
    pub fn empty() -> Self {
        Self {
            next_cards: Vec::new(),
            next_upside: true,
            locked_act: BTreeSet::new(),
            locked_session: BTreeSet::new(),
            locked_scene: BTreeSet::new(),
        }
    }

    pub fn locked(&self, scope: LockScope) -> &BTreeSet<CardIndex> {
        match scope {
            LockScope::Scene => &self.locked_scene,
            LockScope::Session => &self.locked_session,
            LockScope::Act => &self.locked_act,
        }
    }

    pub fn locked_mut(&mut self, scope: LockScope) -> &mut BTreeSet<CardIndex> {
        match scope {
            LockScope::Scene => &mut self.locked_scene,
            LockScope::Session => &mut self.locked_session,
            LockScope::Act => &mut self.locked_act,
        }
    }

    pub fn is_locked(&self, index: CardIndex) -> bool {
        LockScope::ALL
            .iter()
            .any(|&scope| self.locked(scope).contains(&index))
    }

    pub fn total_locked(&self) -> usize {
        self.locked_act.len() + self.locked_session.len() + self.locked_scene.len()
    }

    /// Verifies that no card appears twice across the pile and the locked
    /// sets and, when `expect_full`, that every card is accounted for.
    pub fn check(&self, expect_full: bool) -> Result<(), DomainError> {
        let all = self
            .next_cards
            .iter()
            .chain(&self.locked_act)
            .chain(&self.locked_scene)
            .chain(&self.locked_session);
        let seen = unique(all)?;
        if expect_full && seen < NUMBER_OF_CARDS {
            return Err(DomainError::MissingCards { found: seen });
        }
        Ok(())
    }
}

/// Counts the cards yielded by `cards`, failing on the first repeat.
pub(crate) fn unique<'a>(cards: impl Iterator<Item = &'a CardIndex>) -> Result<usize, DomainError> {
    let mut seen = HashSet::with_capacity(NUMBER_OF_CARDS);
    for &card in cards {
        if !seen.insert(card) {
            return Err(DomainError::DuplicateCard(card.get()));
        }
    }
    Ok(seen.len())
}
