//! Whole-file load/save of the changelog document.
//!
//! The document lives at a single fixed path (conceptually
//! `<resources>/ChangelogInfo.json`). [`DocumentStore::load`] reads the
//! whole file and [`DocumentStore::save`] overwrites it entirely; there
//! are no partial updates and no locking. Two concurrent writers clobber
//! each other, last write wins -- acceptable under the single-operator
//! editing model.
//!
//! A missing file is not an error: `load` returns a fresh default
//! document so a new project starts editing immediately.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::codec;
use crate::document::SceneInfoDoc;
use crate::StoreError;

/// The conventional file name for the changelog document.
pub const DOCUMENT_FILE_NAME: &str = "ChangelogInfo.json";

// ---------------------------------------------------------------------------
// DocumentStore
// ---------------------------------------------------------------------------

/// Handle to the changelog document on durable storage.
///
/// The store is an explicit object passed to whichever component needs
/// it: the editor holds one for read-write access, the runtime display
/// path holds one for read-only access.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Create a store for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for `ChangelogInfo.json` inside a resources directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DOCUMENT_FILE_NAME))
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the document file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the document, or a fresh default document if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error only when the file exists but cannot be read or
    /// parsed. A missing file is the expected first-run state and yields
    /// `SceneInfoDoc::default()` with a log line, not an error.
    pub fn load(&self) -> Result<SceneInfoDoc, StoreError> {
        if !self.path.exists() {
            warn!(
                path = %self.path.display(),
                "changelog document not found, starting from an empty document"
            );
            return Ok(SceneInfoDoc::default());
        }

        let bytes = fs::read(&self.path)?;
        codec::decode(&bytes)
    }

    /// Encode the document and overwrite the file in full.
    ///
    /// Creates the parent directory if it does not exist yet.
    pub fn save(&self, doc: &SceneInfoDoc) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, codec::encode(doc))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
