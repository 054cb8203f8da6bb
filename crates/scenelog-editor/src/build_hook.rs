//! The once-per-build hook invoked by the external build pipeline.
//!
//! The pipeline supplies three values: the target platform, the path of
//! the produced application package, and the externally tracked bundle
//! version code. For Android builds the hook writes the bundle version
//! code back into the stored document, then renders the Markdown report
//! and drops it beside the package as `<package-base-name>_SceneInfo.md`.
//!
//! Nothing here ever aborts the build: a missing document file skips the
//! report with a warning, and any I/O failure is logged and swallowed.

use std::path::{Path, PathBuf};

use anyhow::Context;
use scenelog_model::store::DocumentStore;
use tracing::{error, info, warn};

use crate::report;

// ---------------------------------------------------------------------------
// BuildInfo
// ---------------------------------------------------------------------------

/// Target platform reported by the build pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPlatform {
    /// Android package builds, the only platform that emits the report.
    Android,
    /// Any other target; the hook is a no-op for these.
    Other,
}

/// The values the build pipeline hands to the hook, once per build.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// The platform being built for.
    pub platform: BuildPlatform,
    /// Path of the produced application package (e.g. the `.apk`).
    pub package_path: PathBuf,
    /// Externally tracked bundle version code for this build.
    pub bundle_version_code: i32,
}

// ---------------------------------------------------------------------------
// Hook entry point
// ---------------------------------------------------------------------------

/// Run the build-time step: persist the bundle version code and emit the
/// Markdown report beside the package.
///
/// Infallible by design -- every failure mode degrades to a log line so
/// the surrounding build always continues.
pub fn run_build_hook(store: &DocumentStore, build: &BuildInfo) {
    if build.platform != BuildPlatform::Android {
        return;
    }

    if store.exists() {
        if let Err(e) = write_back_bundle_code(store, build.bundle_version_code) {
            error!(error = %e, "failed to update bundle version code before report generation");
        }
    }

    if !store.exists() {
        warn!(
            path = %store.path().display(),
            "changelog document not found, Markdown report will not be generated"
        );
        return;
    }

    match generate_report(store, &build.package_path) {
        Ok(report_path) => {
            info!(path = %report_path.display(), "changelog report generated");
        }
        Err(e) => {
            error!(error = %e, "error generating changelog report");
        }
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Store the bundle version code supplied by the pipeline into the
/// document. The build version is left alone here; only editor saves
/// advance the patch number.
fn write_back_bundle_code(store: &DocumentStore, code: i32) -> anyhow::Result<()> {
    let mut doc = store.load().context("loading changelog document")?;
    doc.build.bundle_version_code = code;
    store.save(&doc).context("saving changelog document")?;
    Ok(())
}

/// Render the report and write it next to the package artifact.
fn generate_report(store: &DocumentStore, package_path: &Path) -> anyhow::Result<PathBuf> {
    let doc = store.load().context("loading changelog document")?;
    let markdown = report::render(&doc);

    let report_path = report_path_for(package_path);
    std::fs::write(&report_path, markdown)
        .with_context(|| format!("writing {}", report_path.display()))?;
    Ok(report_path)
}

/// `<package-base-name>_SceneInfo.md` in the package's directory.
fn report_path_for(package_path: &Path) -> PathBuf {
    let base = package_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{base}_SceneInfo.md");
    match package_path.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
