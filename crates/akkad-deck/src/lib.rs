//! Akkad deck: the deck state bounded context.
//!
//! Tracks the draw pile, the orientation of the next card and the cards
//! locked for the current scene, session or act. Every mutation is
//! persisted through an injected `StateStore` and announced to the
//! registered shuffle and lock listeners.

pub mod application;
pub mod domain;

pub use domain::config::DeckConfig;
pub use domain::deck::{Deck, Drawn};
pub use domain::events::{LockEvent, LockEventKind, LockScope, ShuffleEvent};
pub use domain::snapshot::DeckSnapshot;
