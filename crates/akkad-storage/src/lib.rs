//! Akkad Storage: persistence adapters.
//!
//! Implements the `StateStore` trait from `akkad-core` on top of the local
//! filesystem.

pub mod file_store;

pub use file_store::FileStore;
