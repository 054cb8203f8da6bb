//! The editor controller: in-memory CRUD over the document, persisted
//! after every mutation.
//!
//! Each operation mutates the in-memory [`SceneInfoDoc`] and immediately
//! triggers a full save, so there is no exposed "unsaved" state. The
//! embedding GUI maps button presses and field edits 1:1 onto these
//! operations; confirmation dialogs and foldout state are its concern,
//! not the controller's.
//!
//! # Patch auto-increment
//!
//! [`ChangelogEditor::save`] advances the build patch version before
//! every write -- saving for ANY reason bumps the patch number, not just
//! explicit build-version edits. This mirrors the behavior existing
//! documents were produced with and is kept deliberately.

use scenelog_model::document::{ChangelogEntry, SceneInfoDoc, SceneRecord, DEFAULT_BUILD_VERSION};
use scenelog_model::store::DocumentStore;
use scenelog_model::version::{
    format_tenths, is_valid_build_version, next_build_patch, next_scene_version, truncate_tenths,
};
use tracing::{info, warn};

use crate::EditorError;

/// Placeholder description for a freshly created changelog entry.
const NEW_ENTRY_PLACEHOLDER: &str = "New changes in this version";

// ---------------------------------------------------------------------------
// ChangelogEditor
// ---------------------------------------------------------------------------

/// Read-write editing session over the changelog document.
///
/// Owns the in-memory document and the store it persists to. Create one
/// per editor window via [`open`](Self::open).
#[derive(Debug)]
pub struct ChangelogEditor {
    doc: SceneInfoDoc,
    store: DocumentStore,
}

impl ChangelogEditor {
    /// Open an editing session, loading the stored document or starting
    /// from an empty one when no file exists yet.
    pub fn open(store: DocumentStore) -> Result<Self, EditorError> {
        let doc = store.load()?;
        Ok(Self { doc, store })
    }

    /// The current in-memory document.
    pub fn document(&self) -> &SceneInfoDoc {
        &self.doc
    }

    // -- scene operations ---------------------------------------------------

    /// Append a new scene with placeholder name and description, version
    /// `1.0`, and an empty changelog.
    pub fn add_scene(&mut self) -> Result<(), EditorError> {
        self.doc.scenes.push(SceneRecord::placeholder());
        self.save()
    }

    /// Remove the scene at `index`.
    ///
    /// The embedding UI is expected to have asked the user for
    /// confirmation before calling this.
    pub fn remove_scene(&mut self, index: usize) -> Result<(), EditorError> {
        self.check_scene(index)?;
        self.doc.scenes.remove(index);
        self.save()
    }

    /// Rename the scene at `index`.
    pub fn set_scene_name(&mut self, index: usize, name: &str) -> Result<(), EditorError> {
        self.check_scene(index)?;
        self.doc.scenes[index].name = name.to_owned();
        self.save()
    }

    /// Replace the description of the scene at `index`. The text may
    /// contain embedded newlines.
    pub fn set_scene_description(&mut self, index: usize, text: &str) -> Result<(), EditorError> {
        self.check_scene(index)?;
        self.doc.scenes[index].description = text.to_owned();
        self.save()
    }

    /// Set the version of the scene at `index`, truncated to one
    /// fractional digit (floor, not round-to-nearest).
    ///
    /// Existing changelog entry labels are NOT renumbered.
    pub fn set_scene_version(&mut self, index: usize, version: f32) -> Result<(), EditorError> {
        self.check_scene(index)?;
        self.doc.scenes[index].version = truncate_tenths(version);
        self.save()
    }

    // -- changelog operations -----------------------------------------------

    /// Add a changelog entry to the scene at `index`.
    ///
    /// Advances the scene version via the 0.1 stepping rule, then
    /// appends an entry labelled with the new version and a placeholder
    /// description.
    pub fn add_changelog_entry(&mut self, index: usize) -> Result<(), EditorError> {
        self.check_scene(index)?;

        let scene = &mut self.doc.scenes[index];
        let version = next_scene_version(scene.version);
        scene.version = version;
        scene.changelog.push(ChangelogEntry {
            version: format_tenths(version),
            description: NEW_ENTRY_PLACEHOLDER.to_owned(),
        });

        self.save()
    }

    /// Replace the description of one changelog entry. The derived
    /// version label is read-only and stays as created.
    pub fn set_changelog_description(
        &mut self,
        scene_index: usize,
        entry_index: usize,
        text: &str,
    ) -> Result<(), EditorError> {
        self.check_entry(scene_index, entry_index)?;
        self.doc.scenes[scene_index].changelog[entry_index].description = text.to_owned();
        self.save()
    }

    /// Remove one changelog entry. Sibling entries and the scene version
    /// are left untouched; nothing is renumbered.
    pub fn remove_changelog_entry(
        &mut self,
        scene_index: usize,
        entry_index: usize,
    ) -> Result<(), EditorError> {
        self.check_entry(scene_index, entry_index)?;
        self.doc.scenes[scene_index].changelog.remove(entry_index);
        self.save()
    }

    // -- build version ------------------------------------------------------

    /// Set the build version from user input.
    ///
    /// A string that is not exactly 3 numeric dot-separated components
    /// is rejected: the version resets to `"1.0.001"` and a warning is
    /// logged. The edit still persists (and the patch auto-increment
    /// applies on that save like any other).
    pub fn set_build_version(&mut self, version: &str) -> Result<(), EditorError> {
        if is_valid_build_version(version) {
            self.doc.build.build_version = version.to_owned();
        } else {
            warn!(
                input = version,
                "build version must be MajorVersion.MinorVersion.PatchVersion, \
                 resetting to default"
            );
            self.doc.build.build_version = DEFAULT_BUILD_VERSION.to_owned();
        }
        self.save()
    }

    // -- persistence --------------------------------------------------------

    /// Persist the document, advancing the build patch version first.
    ///
    /// Every mutating operation funnels through here, so every save --
    /// whatever triggered it -- bumps the patch number.
    pub fn save(&mut self) -> Result<(), EditorError> {
        self.doc.build.build_version = next_build_patch(&self.doc.build.build_version);
        self.store.save(&self.doc)?;
        info!(
            path = %self.store.path().display(),
            build_version = %self.doc.build.build_version,
            "changelog document saved"
        );
        Ok(())
    }

    // -- internal helpers ---------------------------------------------------

    fn check_scene(&self, index: usize) -> Result<(), EditorError> {
        let count = self.doc.scenes.len();
        if index >= count {
            return Err(EditorError::SceneIndexOutOfBounds { index, count });
        }
        Ok(())
    }

    fn check_entry(&self, scene_index: usize, entry_index: usize) -> Result<(), EditorError> {
        self.check_scene(scene_index)?;
        let count = self.doc.scenes[scene_index].changelog.len();
        if entry_index >= count {
            return Err(EditorError::EntryIndexOutOfBounds {
                index: entry_index,
                count,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> (ChangelogEditor, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::in_dir(dir.path());
        (ChangelogEditor::open(store).unwrap(), dir)
    }

    fn patch_of(editor: &ChangelogEditor) -> i64 {
        editor
            .document()
            .build
            .build_version
            .split('.')
            .nth(2)
            .unwrap()
            .parse()
            .unwrap()
    }

    // -- 1. Scene CRUD ------------------------------------------------------

    #[test]
    fn add_scene_appends_placeholder() {
        let (mut editor, _dir) = editor();
        editor.add_scene().unwrap();

        let doc = editor.document();
        assert_eq!(doc.scenes.len(), 1);
        assert_eq!(doc.scenes[0].name, "New Scene");
        assert_eq!(doc.scenes[0].version, 1.0);
        assert!(doc.scenes[0].changelog.is_empty());
    }

    #[test]
    fn remove_scene_deletes_record() {
        let (mut editor, _dir) = editor();
        editor.add_scene().unwrap();
        editor.add_scene().unwrap();
        editor.set_scene_name(0, "Doomed").unwrap();

        editor.remove_scene(0).unwrap();
        assert_eq!(editor.document().scenes.len(), 1);
        assert_ne!(editor.document().scenes[0].name, "Doomed");
    }

    #[test]
    fn out_of_bounds_scene_index_is_an_error() {
        let (mut editor, _dir) = editor();
        assert!(matches!(
            editor.remove_scene(0),
            Err(EditorError::SceneIndexOutOfBounds { index: 0, count: 0 })
        ));
        assert!(editor.set_scene_version(3, 1.0).is_err());
    }

    // -- 2. Version edits ---------------------------------------------------

    #[test]
    fn scene_version_is_truncated_not_rounded() {
        let (mut editor, _dir) = editor();
        editor.add_scene().unwrap();
        editor.set_scene_version(0, 1.29).unwrap();
        assert_eq!(editor.document().scenes[0].version, 1.2);
    }

    #[test]
    fn invalid_build_version_resets_to_default_then_increments() {
        let (mut editor, _dir) = editor();
        editor.set_build_version("totally.bogus").unwrap();
        // Reset to 1.0.001, then the save bumped it once.
        assert_eq!(editor.document().build.build_version, "1.0.002");
    }

    #[test]
    fn valid_build_version_is_stored() {
        let (mut editor, _dir) = editor();
        editor.set_build_version("2.5.010").unwrap();
        assert_eq!(editor.document().build.build_version, "2.5.011");
    }

    // -- 3. Changelog entries -----------------------------------------------

    #[test]
    fn add_changelog_entry_steps_version_and_labels_entry() {
        let (mut editor, _dir) = editor();
        editor.add_scene().unwrap();
        editor.set_scene_version(0, 1.9).unwrap();

        editor.add_changelog_entry(0).unwrap();

        let scene = &editor.document().scenes[0];
        assert_eq!(scene.version, 2.1);
        assert_eq!(scene.changelog.len(), 1);
        assert_eq!(scene.changelog[0].version, "2.1");
        assert_eq!(scene.changelog[0].description, NEW_ENTRY_PLACEHOLDER);
    }

    #[test]
    fn remove_changelog_entry_does_not_renumber() {
        let (mut editor, _dir) = editor();
        editor.add_scene().unwrap();
        editor.add_changelog_entry(0).unwrap(); // 1.1
        editor.add_changelog_entry(0).unwrap(); // 1.2
        editor.add_changelog_entry(0).unwrap(); // 1.3

        editor.remove_changelog_entry(0, 1).unwrap();

        let scene = &editor.document().scenes[0];
        assert_eq!(scene.version, 1.3); // scene version untouched
        let labels: Vec<&str> = scene.changelog.iter().map(|e| e.version.as_str()).collect();
        assert_eq!(labels, vec!["1.1", "1.3"]);
    }

    #[test]
    fn entry_index_out_of_bounds_is_an_error() {
        let (mut editor, _dir) = editor();
        editor.add_scene().unwrap();
        assert!(matches!(
            editor.set_changelog_description(0, 0, "x"),
            Err(EditorError::EntryIndexOutOfBounds { index: 0, count: 0 })
        ));
    }

    // -- 4. Patch auto-increment on every save ------------------------------

    #[test]
    fn every_mutation_advances_the_patch() {
        let (mut editor, _dir) = editor();
        let start = patch_of(&editor);

        editor.add_scene().unwrap();
        editor.set_scene_name(0, "Level1").unwrap();
        editor.set_scene_description(0, "desc").unwrap();

        // Three saves happened, three increments.
        assert_eq!(patch_of(&editor), start + 3);
    }
}
