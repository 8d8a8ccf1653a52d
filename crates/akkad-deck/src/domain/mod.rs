//! Domain layer for the deck context.

pub mod commands;
pub mod config;
pub mod deck;
pub mod events;
pub mod snapshot;
pub(crate) mod state;
