//! Domain layer for the content catalog.

pub mod cards;
pub mod catalog;
pub mod suits;
