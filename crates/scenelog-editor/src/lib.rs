//! Scenelog Editor -- read-write tooling for the changelog document.
//!
//! This crate builds on [`scenelog_model`] to provide the editing side
//! of the system: a controller that applies CRUD operations and persists
//! after every mutation, a Markdown report generator, and the hook the
//! build pipeline invokes once per Android build.
//!
//! # Quick Start
//!
//! ```no_run
//! use scenelog_editor::prelude::*;
//! use scenelog_model::prelude::*;
//!
//! let store = DocumentStore::in_dir("Assets/Resources");
//! let mut editor = ChangelogEditor::open(store).unwrap();
//!
//! editor.add_scene().unwrap();
//! editor.set_scene_name(0, "Level1").unwrap();
//! editor.add_changelog_entry(0).unwrap();
//! ```
//!
//! # Modules
//!
//! - [`controller`]: CRUD operations, each followed by a full persist
//!   with the build patch auto-increment.
//! - [`report`]: deterministic Markdown rendering of the document.
//! - [`build_hook`]: the once-per-build entry point that writes the
//!   bundle version code back and emits the report beside the package.

#![deny(unsafe_code)]

pub mod build_hook;
pub mod controller;
pub mod report;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by editor operations.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The scene index does not name a scene in the document.
    #[error("scene index {index} out of bounds (document has {count} scenes)")]
    SceneIndexOutOfBounds { index: usize, count: usize },

    /// The entry index does not name a changelog entry in the scene.
    #[error("changelog entry index {index} out of bounds (scene has {count} entries)")]
    EntryIndexOutOfBounds { index: usize, count: usize },

    /// Persisting the document failed.
    #[error(transparent)]
    Store(#[from] scenelog_model::StoreError),
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::build_hook::{run_build_hook, BuildInfo, BuildPlatform};
    pub use crate::controller::ChangelogEditor;
    pub use crate::report;
    pub use crate::EditorError;
}
