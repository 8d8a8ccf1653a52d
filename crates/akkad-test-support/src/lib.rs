//! Shared test mocks and utilities for the Akkad deck.

mod catalog;
mod listener;
mod rng;
mod store;

pub use catalog::test_catalog;
pub use listener::Recorder;
pub use rng::{MockRng, SequenceRng};
pub use store::{FailingStore, MemoryStore};
