//! Application layer for the deck context.

pub mod command_handlers;
pub mod query_handlers;
