//! The validated, read-only card catalog.

use akkad_core::error::DomainError;

use super::cards::{Card, CardIndex, NUMBER_OF_CARDS};
use super::suits::SuitKey;

/// All cards of the deck, addressable by `CardIndex`.
///
/// A catalog always holds exactly `NUMBER_OF_CARDS` cards, one per index,
/// so lookups cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Builds a catalog from cards in any order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the cards do not cover every
    /// index exactly once.
    pub fn new(mut cards: Vec<Card>) -> Result<Self, DomainError> {
        if cards.len() != NUMBER_OF_CARDS {
            return Err(DomainError::Validation(format!(
                "catalog must contain {NUMBER_OF_CARDS} cards, found {}",
                cards.len()
            )));
        }
        cards.sort_by_key(|card| card.index);
        for (position, card) in cards.iter().enumerate() {
            if card.index.as_usize() != position {
                return Err(DomainError::Validation(format!(
                    "catalog index {} is missing or duplicated",
                    card.index
                )));
            }
        }
        Ok(Self { cards })
    }

    /// The card at `index`.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> &Card {
        &self.cards[index.as_usize()]
    }

    /// Suit of the card at `index`.
    #[must_use]
    pub fn suit_of(&self, index: CardIndex) -> SuitKey {
        self.card(index).suit
    }

    /// Cards in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Indices of every card in `suit`.
    pub fn indices_of(&self, suit: SuitKey) -> impl Iterator<Item = CardIndex> + '_ {
        self.cards
            .iter()
            .filter(move |card| card.suit == suit)
            .map(|card| card.index)
    }
}
