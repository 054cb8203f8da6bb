//! Scenelog Runtime -- read-only scene info display for the running game.
//!
//! At application start the runtime loads the same changelog document
//! the editor maintains, looks up the active scene by name, and formats
//! the strings the on-screen text sinks display. This crate never writes
//! the document.
//!
//! # Quick Start
//!
//! ```no_run
//! use scenelog_model::prelude::*;
//! use scenelog_runtime::display::load_and_display;
//!
//! let store = DocumentStore::in_dir("resources");
//! let display = load_and_display(&store, "Level1");
//! println!("{}", display.changelog);
//! ```

#![deny(unsafe_code)]

pub mod display;

pub use display::{load_and_display, scene_display, SceneDisplay};
