//! Card identity and immutable card entries.

use std::fmt;

use akkad_core::error::DomainError;
use serde::{Deserialize, Serialize};

use super::suits::SuitKey;

/// Total number of cards in the deck.
pub const NUMBER_OF_CARDS: usize = 90;

/// Position of a card in the catalog, always in `[0, NUMBER_OF_CARDS)`.
///
/// Only obtainable through the range-checked constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct CardIndex(u8);

impl CardIndex {
    /// Validates `value` as a card index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCardIndex` if `value` is out of range.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u8::try_from(value) {
            Ok(v) if usize::from(v) < NUMBER_OF_CARDS => Ok(Self(v)),
            _ => Err(DomainError::InvalidCardIndex(value)),
        }
    }

    /// Every index of the deck, in ascending order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUMBER_OF_CARDS).map(|i| Self(i as u8))
    }

    /// The raw index.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The index as a `usize`, for slice access.
    #[must_use]
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<i64> for CardIndex {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CardIndex> for u8 {
    fn from(index: CardIndex) -> Self {
        index.0
    }
}

impl fmt::Display for CardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Card name.
    pub name: String,
    /// Suit the card belongs to.
    pub suit: SuitKey,
    /// Legend shown when the card is drawn upright.
    pub up_legend: String,
    /// Legend shown when the card is drawn reversed.
    pub reversed_legend: String,
    /// Numeric value.
    pub value: u32,
    /// Value as printed on the card.
    pub display_value: String,
    /// Position in the catalog.
    pub index: CardIndex,
}
