//! File-backed implementation of `StateStore`.
//!
//! Each key is stored as `<dir>/<key>.json`. A save writes a temporary
//! sibling file and renames it over the target, so readers never observe a
//! half-written document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use akkad_core::error::DomainError;
use akkad_core::storage::StateStore;
use tracing::{debug, instrument};

/// Stores documents as JSON files in one directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the directory cannot be
    /// created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            DomainError::Infrastructure(format!("cannot create {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the documents.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(DomainError::Validation(format!(
                "invalid storage key: {key:?}"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StateStore for FileStore {
    #[instrument(skip(self))]
    fn load(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored document");
                Ok(None)
            }
            Err(e) => Err(DomainError::Infrastructure(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }

    #[instrument(skip(self, document), fields(bytes = document.len()))]
    fn save(&self, key: &str, document: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, document).map_err(|e| {
            DomainError::Infrastructure(format!("cannot write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            DomainError::Infrastructure(format!("cannot replace {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "document saved");
        Ok(())
    }
}
