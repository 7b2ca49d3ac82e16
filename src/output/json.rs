//! JSON summary output writer.
//!
//! Writes BlockSummary structs to JSON files with proper formatting.

use crate::aggregator::schema::BlockSummary;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a summary to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `summary` - Summary to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let summary = summarize_block(&block)?;
/// write_summary(&summary, "summary.json")?;
/// ```
pub fn write_summary(
    summary: &BlockSummary,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_json(summary, output_path.as_ref(), true)
}

/// Write summary as compact JSON (no formatting)
///
/// **Public** - useful when file size matters
pub fn write_summary_compact(
    summary: &BlockSummary,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_json(summary, output_path.as_ref(), false)
}

fn write_json(summary: &BlockSummary, output_path: &Path, pretty: bool) -> Result<(), OutputError> {
    info!("Writing summary to: {}", output_path.display());

    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(writer, summary)?;
    } else {
        serde_json::to_writer(writer, summary)?;
    }

    info!(
        "Summary written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a summary to a pretty JSON string
///
/// **Public** - used for stdout output and tests
pub fn summary_to_string(summary: &BlockSummary) -> Result<String, OutputError> {
    serde_json::to_string_pretty(summary).map_err(OutputError::SerializationFailed)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a summary from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<BlockSummary, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let summary: BlockSummary =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Summary loaded: block {}, {} transactions",
        summary.number, summary.transactions.total
    );

    Ok(summary)
}
