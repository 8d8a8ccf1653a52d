//! Akkad deck content catalog.
//!
//! Owns the immutable card and suit model, validates that a catalog covers
//! the whole deck exactly once, loads catalogs from JSON or YAML files and
//! maps card indices to their artwork.

pub mod application;
pub mod domain;
pub mod image;

pub use domain::cards::{Card, CardIndex, NUMBER_OF_CARDS};
pub use domain::catalog::Catalog;
pub use domain::suits::{SuitInfo, SuitKey};
