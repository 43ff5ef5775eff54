//! Input/output: command line, configuration, errors, logging and renderers

/// Command-line parsing and the generate, solve and render cycle
pub mod cli;
/// Defaults, limits, colors and glyphs
pub mod configuration;
/// Error types and constructors
pub mod error;
/// PNG rendering and shared pixel layout
pub mod image;
/// Stderr logger behind the `log` facade
pub mod logging;
/// Generation progress display
pub mod progress;
/// SVG rendering
pub mod svg;
/// Box-drawing text rendering
pub mod text;

use std::path::Path;

use crate::io::error::{Result, WithPath};

/// Create the parent directory of an output path if it is missing
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")
        }
        _ => Ok(()),
    }
}
