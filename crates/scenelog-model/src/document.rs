//! The changelog document aggregate and its record types.
//!
//! Field names are pinned with `#[serde(rename = ...)]` to the spelling
//! used by the legacy `ChangelogInfo.json` files, so documents written
//! by earlier tooling load unchanged.
//!
//! The document is a flat aggregate: build metadata plus an ordered list
//! of [`SceneRecord`]s. Scene names are the lookup key but uniqueness is
//! NOT enforced; [`SceneInfoDoc::find_scene`] returns the first match in
//! stored order.

use serde::{Deserialize, Serialize};

/// The build version a malformed or absent value falls back to.
pub const DEFAULT_BUILD_VERSION: &str = "1.0.001";

// ---------------------------------------------------------------------------
// ChangelogEntry
// ---------------------------------------------------------------------------

/// One versioned note describing what changed in a scene.
///
/// Entries are append-only in normal use and keep their insertion order,
/// which doubles as chronological order. The `version` label is derived
/// from the scene version at creation time and is not edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Version label, decimal-formatted to one fractional digit (e.g. `"2.1"`).
    #[serde(rename = "ChangelogVersion")]
    pub version: String,
    /// Free text; may contain embedded newlines.
    #[serde(rename = "ChangelogDescription")]
    pub description: String,
}

// ---------------------------------------------------------------------------
// SceneRecord
// ---------------------------------------------------------------------------

/// Metadata for one scene: its version, description, and changelog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// Scene name, the lookup key. Uniqueness is not enforced.
    #[serde(rename = "SceneName")]
    pub name: String,
    /// Scene version with one fractional digit of precision.
    #[serde(rename = "SceneVersion")]
    pub version: f32,
    /// Free text; may contain embedded newlines.
    #[serde(rename = "SceneDescription")]
    pub description: String,
    /// Ordered changelog, oldest first.
    #[serde(rename = "SceneChangelog", default)]
    pub changelog: Vec<ChangelogEntry>,
}

impl SceneRecord {
    /// A freshly added scene as the editor creates it: placeholder name
    /// and description, version `1.0`, empty changelog.
    pub fn placeholder() -> Self {
        Self {
            name: "New Scene".to_owned(),
            version: 1.0,
            description: "Description here".to_owned(),
            changelog: Vec::new(),
        }
    }

    /// The most recent changelog entry, or `None` if the changelog is empty.
    pub fn latest_changelog(&self) -> Option<&ChangelogEntry> {
        self.changelog.last()
    }
}

// ---------------------------------------------------------------------------
// BuildMetadata
// ---------------------------------------------------------------------------

/// Build-level metadata stored alongside the scene list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildMetadata {
    /// Build version in `MAJOR.MINOR.PATCH` form, all components numeric.
    /// The patch component auto-increments on every save.
    #[serde(rename = "BuildVersion", default = "default_build_version")]
    pub build_version: String,
    /// Externally tracked bundle version code, written back at build time.
    #[serde(rename = "BundleVersionCode", default = "default_bundle_code")]
    pub bundle_version_code: i32,
}

fn default_build_version() -> String {
    DEFAULT_BUILD_VERSION.to_owned()
}

fn default_bundle_code() -> i32 {
    1
}

impl Default for BuildMetadata {
    fn default() -> Self {
        Self {
            build_version: DEFAULT_BUILD_VERSION.to_owned(),
            bundle_version_code: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// SceneInfoDoc
// ---------------------------------------------------------------------------

/// The whole persisted document: build metadata + ordered scene list.
///
/// This is the single unit of persistence. It is read in full at load
/// time and overwritten in full at every save; there are no partial
/// updates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneInfoDoc {
    /// Scene records in document order.
    #[serde(rename = "Scenes", default)]
    pub scenes: Vec<SceneRecord>,
    /// Build metadata, flattened beside `Scenes` on disk.
    #[serde(flatten)]
    pub build: BuildMetadata,
}

impl SceneInfoDoc {
    /// Find the first scene whose name exactly matches `name`.
    ///
    /// Linear scan in stored order, case-sensitive. Returns `None` when
    /// no scene matches; callers fall back to a "not available" display.
    pub fn find_scene(&self, name: &str) -> Option<&SceneRecord> {
        self.scenes.iter().find(|scene| scene.name == name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
