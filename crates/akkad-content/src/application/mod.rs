//! Application layer for the content catalog.

pub mod loader;
