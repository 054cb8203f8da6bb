//! Markdown report rendering of the changelog document.
//!
//! The report is a deterministic textual template: header block with the
//! build version and bundle version code, then one section per scene in
//! document order, then a generation timestamp. No reordering, filtering,
//! or other transformation is performed -- what is in the document is
//! what lands in the report.

use chrono::{DateTime, Local};
use scenelog_model::document::{SceneInfoDoc, SceneRecord};
use scenelog_model::version::format_tenths;
use std::fmt::Write;

/// Fallback body for a scene with a blank description.
const NO_DESCRIPTION: &str = "No description available.";
/// Fallback body for a scene with no changelog entries.
const NO_CHANGELOG: &str = "No changelog entries available.";
/// Fallback cell text for an entry with a blank description.
const NO_ENTRY_DESCRIPTION: &str = "No description.";
/// Body shown when the document has no scenes at all.
const NO_SCENES: &str = "No scene information available.";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the document to Markdown, stamped with the current local time.
pub fn render(doc: &SceneInfoDoc) -> String {
    render_at(doc, Local::now())
}

/// Render the document to Markdown with an explicit generation time.
///
/// Split out from [`render`] so tests can assert the full output
/// deterministically.
pub fn render_at(doc: &SceneInfoDoc, generated: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str("# Scene Information\n");
    let _ = writeln!(out, "**Build Version:** {}", doc.build.build_version);
    let _ = writeln!(out, "**BundleVersionCode:** {}", doc.build.bundle_version_code);
    out.push_str("\n---\n\n");

    if doc.scenes.is_empty() {
        out.push_str(NO_SCENES);
        out.push('\n');
    } else {
        for scene in &doc.scenes {
            render_scene(&mut out, scene);
        }
    }

    let _ = writeln!(out, "*Generated on: {}*", generated.format("%Y-%m-%d %H:%M:%S"));
    out
}

fn render_scene(out: &mut String, scene: &SceneRecord) {
    let _ = writeln!(out, "## {}", scene.name);
    let _ = writeln!(out, "**Version:** {}", format_tenths(scene.version));
    out.push('\n');

    out.push_str("### Description\n");
    if scene.description.is_empty() {
        out.push_str(NO_DESCRIPTION);
        out.push('\n');
    } else {
        out.push_str(&scene.description);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("### Changelog\n");
    if scene.changelog.is_empty() {
        out.push_str(NO_CHANGELOG);
        out.push('\n');
    } else {
        out.push_str("| Version | Description |\n");
        out.push_str("|---------|-------------|\n");
        for entry in &scene.changelog {
            let cell = if entry.description.is_empty() {
                NO_ENTRY_DESCRIPTION.to_owned()
            } else {
                escape_table_cell(&entry.description)
            };
            let _ = writeln!(out, "| {} | {} |", entry.version, cell);
        }
    }

    out.push_str("\n---\n\n");
}

/// Escape pipe characters so free text cannot break the table layout.
fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
