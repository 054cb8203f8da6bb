//! Scenelog Model -- shared data model and persistence for per-scene
//! version/changelog metadata.
//!
//! This crate is the single source of truth for the changelog document
//! shape. Both the editor tooling (`scenelog-editor`) and the runtime
//! display path (`scenelog-runtime`) depend on it, so the on-disk JSON
//! format is defined exactly once.
//!
//! # Quick Start
//!
//! ```
//! use scenelog_model::prelude::*;
//!
//! let mut doc = SceneInfoDoc::default();
//! doc.scenes.push(SceneRecord::placeholder());
//!
//! let bytes = codec::encode(&doc);
//! let restored = codec::decode(&bytes).unwrap();
//! assert_eq!(restored, doc);
//! ```
//!
//! # Modules
//!
//! - [`document`]: the document aggregate ([`SceneInfoDoc`]) and its
//!   record types, with serde field names pinned to the legacy JSON.
//! - [`codec`]: encode/decode with the newline-escaping transform the
//!   stored files use for multi-line text.
//! - [`store`]: whole-file load/save of the document at a fixed path.
//! - [`version`]: pure version arithmetic (build patch increment, scene
//!   version stepping, validation).

#![deny(unsafe_code)]

pub mod codec;
pub mod document;
pub mod store;
pub mod version;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by document persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the document file failed.
    #[error("document i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored bytes are not a valid changelog document.
    #[error("document parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::codec;
    pub use crate::document::{
        BuildMetadata, ChangelogEntry, SceneInfoDoc, SceneRecord, DEFAULT_BUILD_VERSION,
    };
    pub use crate::store::DocumentStore;
    pub use crate::version::{
        format_tenths, is_valid_build_version, next_build_patch, next_scene_version,
        truncate_tenths,
    };
    pub use crate::StoreError;
}
