//! Akkad Core: shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the deck,
//! content and storage crates depend on. It contains no infrastructure code.

pub mod error;
pub mod event;
pub mod rng;
pub mod storage;
