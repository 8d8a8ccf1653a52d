//! Mock `StateStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use akkad_core::error::DomainError;
use akkad_core::storage::StateStore;

/// An in-memory store that keeps the current document per key and a log of
/// every save.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, String>>,
    saves: Mutex<Vec<(String, String)>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `document` under `key`.
    #[must_use]
    pub fn with_document(key: &str, document: &str) -> Self {
        let store = Self::new();
        store
            .documents
            .lock()
            .unwrap()
            .insert(key.to_owned(), document.to_owned());
        store
    }

    /// The document currently stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn document(&self, key: &str) -> Option<String> {
        self.documents.lock().unwrap().get(key).cloned()
    }

    /// Number of saves performed so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.documents.lock().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, document: &str) -> Result<(), DomainError> {
        self.documents
            .lock()
            .unwrap()
            .insert(key.to_owned(), document.to_owned());
        self.saves
            .lock()
            .unwrap()
            .push((key.to_owned(), document.to_owned()));
        Ok(())
    }
}

/// A store that returns an infrastructure error. Useful for testing
/// error-handling paths.
#[derive(Debug, Clone, Copy)]
pub struct FailingStore {
    fail_load: bool,
    fail_save: bool,
}

impl FailingStore {
    /// Fails every load and every save.
    #[must_use]
    pub fn always() -> Self {
        Self {
            fail_load: true,
            fail_save: true,
        }
    }

    /// Fails loads; saves succeed and are discarded.
    #[must_use]
    pub fn on_load() -> Self {
        Self {
            fail_load: true,
            fail_save: false,
        }
    }

    /// Loads find nothing; saves fail.
    #[must_use]
    pub fn on_save() -> Self {
        Self {
            fail_load: false,
            fail_save: true,
        }
    }
}

impl StateStore for FailingStore {
    fn load(&self, _key: &str) -> Result<Option<String>, DomainError> {
        if self.fail_load {
            return Err(DomainError::Infrastructure("storage unavailable".into()));
        }
        Ok(None)
    }

    fn save(&self, _key: &str, _document: &str) -> Result<(), DomainError> {
        if self.fail_save {
            return Err(DomainError::Infrastructure("storage unavailable".into()));
        }
        Ok(())
    }
}
