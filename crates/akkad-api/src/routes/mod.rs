//! Route modules.

pub mod cards;
pub mod deck;
pub mod health;
