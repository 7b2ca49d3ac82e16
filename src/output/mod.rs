//! Output writers for block summaries.
//!
//! This module handles:
//! - JSON summaries (pretty and compact)
//! - Plain-text summaries for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_summary, summary_to_string, write_summary, write_summary_compact};
pub use text::render_text_summary;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
