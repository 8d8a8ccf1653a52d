//! Persistent state storage abstraction.
//!
//! A store maps a well-known key to one serialized document. Writes are
//! treated as atomic: a reader sees either the previous document or the
//! new one.

use crate::error::DomainError;

/// Key/value store for serialized state documents.
pub trait StateStore: Send + Sync {
    /// Load the document stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replace the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backend cannot be written.
    fn save(&self, key: &str, document: &str) -> Result<(), DomainError>;
}
