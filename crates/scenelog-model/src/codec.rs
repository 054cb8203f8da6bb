//! Encode/decode between [`SceneInfoDoc`] and the stored JSON bytes.
//!
//! The storage format keeps multi-line text in single JSON strings by
//! replacing real newline characters with the literal two-character
//! sequence `\n` on encode, and reversing the substitution on decode.
//! The transform applies to exactly two fields: the scene description
//! and the changelog entry description.
//!
//! # Lossiness
//!
//! Decode cannot distinguish an escape marker from a backslash-n pair
//! the user typed literally; such text comes back with a real newline.
//! This is an accepted limitation of the storage format, kept for
//! byte-compatibility with existing files.

use crate::document::SceneInfoDoc;
use crate::StoreError;

/// The two-character escape marker stored in place of a real newline.
const NEWLINE_MARKER: &str = "\\n";

// ---------------------------------------------------------------------------
// Encode / decode
// ---------------------------------------------------------------------------

/// Serialize a document to pretty-printed JSON bytes.
///
/// Works on a deep copy: real newlines in the description fields are
/// replaced with the literal `\n` marker before serialization, leaving
/// the caller's document untouched.
pub fn encode(doc: &SceneInfoDoc) -> Vec<u8> {
    let mut escaped = doc.clone();
    transform_descriptions(&mut escaped, |text| text.replace('\n', NEWLINE_MARKER));

    serde_json::to_vec_pretty(&escaped)
        .expect("a changelog document should always be JSON-serializable")
}

/// Parse JSON bytes into a document, restoring real newlines in the
/// description fields.
pub fn decode(bytes: &[u8]) -> Result<SceneInfoDoc, StoreError> {
    let mut doc: SceneInfoDoc = serde_json::from_slice(bytes)?;
    transform_descriptions(&mut doc, |text| text.replace(NEWLINE_MARKER, "\n"));
    Ok(doc)
}

/// Apply `f` to every text field that may contain embedded newlines.
fn transform_descriptions(doc: &mut SceneInfoDoc, f: impl Fn(&str) -> String) {
    for scene in &mut doc.scenes {
        scene.description = f(&scene.description);
        for entry in &mut scene.changelog {
            entry.description = f(&entry.description);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
