//! Scene lookup and display-string formatting.
//!
//! The lookup is a linear scan of the scene list in stored order; the
//! first exact, case-sensitive name match wins. A miss is not an error:
//! the display degrades to a fixed "not available" state with a warning
//! in the log, and the scene name field echoes the query so the player
//! still sees which scene they are in.

use scenelog_model::document::SceneInfoDoc;
use scenelog_model::store::DocumentStore;
use scenelog_model::version::format_tenths;
use tracing::{info, warn};

/// Text shown in place of data that could not be found.
pub const NOT_FOUND_TEXT: &str = "Information not available";
/// Text shown when a found scene has no changelog entries yet.
pub const NO_CHANGELOG_TEXT: &str = "No changelog entries.";

// ---------------------------------------------------------------------------
// SceneDisplay
// ---------------------------------------------------------------------------

/// The formatted strings handed to the on-screen text sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneDisplay {
    /// Combined app version / bundle code line.
    pub build_version_line: String,
    /// The scene name (echoes the query on a lookup miss).
    pub scene_name: String,
    /// Scene version with one fractional digit.
    pub scene_version: String,
    /// The scene description.
    pub scene_description: String,
    /// Description of the LAST changelog entry only, not a concatenation.
    pub changelog: String,
}

impl SceneDisplay {
    /// The fixed display state used when the scene is not in the document.
    fn not_found(scene_name: &str) -> Self {
        Self {
            build_version_line: NOT_FOUND_TEXT.to_owned(),
            scene_name: scene_name.to_owned(),
            scene_version: NOT_FOUND_TEXT.to_owned(),
            scene_description: NOT_FOUND_TEXT.to_owned(),
            changelog: NOT_FOUND_TEXT.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Lookup + formatting
// ---------------------------------------------------------------------------

/// Format the display strings for `current_scene` from a loaded document.
///
/// A lookup miss yields the fixed not-found display and a warning; it is
/// never an error.
pub fn scene_display(doc: &SceneInfoDoc, current_scene: &str) -> SceneDisplay {
    let Some(scene) = doc.find_scene(current_scene) else {
        warn!(scene = current_scene, "no changelog info found for scene");
        return SceneDisplay::not_found(current_scene);
    };

    let changelog = match scene.latest_changelog() {
        Some(entry) => entry.description.clone(),
        None => NO_CHANGELOG_TEXT.to_owned(),
    };

    info!(scene = %scene.name, "displaying changelog info");
    SceneDisplay {
        build_version_line: format!(
            "AppVersion: {} BundleVersionCode: {}",
            doc.build.build_version, doc.build.bundle_version_code
        ),
        scene_name: scene.name.clone(),
        scene_version: format_tenths(scene.version),
        scene_description: scene.description.clone(),
        changelog,
    }
}

/// Application-start convenience: load the document read-only and format
/// the display for `current_scene`.
///
/// A document that is missing or fails to decode degrades to the
/// not-found display with a warning; startup never fails over changelog
/// metadata.
pub fn load_and_display(store: &DocumentStore, current_scene: &str) -> SceneDisplay {
    match store.load() {
        Ok(doc) => scene_display(&doc, current_scene),
        Err(e) => {
            warn!(error = %e, "failed to load changelog document for display");
            SceneDisplay::not_found(current_scene)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
