//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A card index outside `[0, NUMBER_OF_CARDS)`.
    #[error("invalid card index {0}")]
    InvalidCardIndex(i64),

    /// The same card was found twice across the pile and the locked sets.
    #[error("duplicate card {0}")]
    DuplicateCard(u8),

    /// Fewer cards than the full deck are accounted for.
    #[error("missing cards: only {found} accounted for")]
    MissingCards {
        /// Number of distinct cards found.
        found: usize,
    },

    /// Every card is locked; there is nothing left to shuffle.
    #[error("cannot reshuffle, there are no cards left")]
    ExhaustedPool,

    /// A validation error in domain logic or input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
