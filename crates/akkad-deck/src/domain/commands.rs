//! Commands for the deck context.

use super::events::LockScope;

/// An operation a user can perform on the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckCommand {
    /// Rebuild the pile from every unlocked card.
    Shuffle,
    /// Discard the top card and reveal the next one.
    Draw,
    /// Lock a card for a scope.
    Lock(LockScope),
    /// Release the locks of a scope and every scope nested in it.
    Refresh(LockScope),
}

impl DeckCommand {
    /// The type name for this command (for logging/routing).
    #[must_use]
    pub fn command_type(&self) -> &'static str {
        match self {
            DeckCommand::Shuffle => "deck.shuffle",
            DeckCommand::Draw => "deck.draw",
            DeckCommand::Lock(_) => "deck.lock",
            DeckCommand::Refresh(_) => "deck.refresh",
        }
    }
}
