//! Humanize command implementation.
//!
//! The humanize command:
//! 1. Reads the block JSON
//! 2. Summarizes transactions and calendar labels
//! 3. Writes the JSON summary (file or stdout)

use super::models::HumanizeArgs;
use crate::aggregator::{summarize_block, BlockSummary};
use crate::output::{
    render_text_summary, summary_to_string, validate_path, write_summary, write_summary_compact,
};
use crate::parser::read_block;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the humanize command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Block file missing or malformed
/// * Undecodable transaction amounts or timestamp
/// * File write errors
pub fn execute_humanize(args: &HumanizeArgs) -> Result<BlockSummary> {
    let start_time = Instant::now();

    info!("Step 1/3: Reading block from {}...", args.block_path.display());
    let block = read_block(&args.block_path).with_context(|| {
        format!("Failed to read block from {}", args.block_path.display())
    })?;

    info!("Step 2/3: Summarizing {} transactions...", block.transactions.len());
    let summary = summarize_block(&block)
        .with_context(|| format!("Failed to summarize block {}", block.number))?;

    debug!("Category counts: {:?}", summary.transactions.types);

    info!("Step 3/3: Writing summary...");
    match &args.output_json {
        Some(path) if args.compact => {
            write_summary_compact(&summary, path).context("Failed to write summary JSON")?;
            info!("✓ Summary written to: {}", path.display());
        }
        Some(path) => {
            write_summary(&summary, path).context("Failed to write summary JSON")?;
            info!("✓ Summary written to: {}", path.display());
        }
        None if !args.print_summary => {
            let json = if args.compact {
                serde_json::to_string(&summary)?
            } else {
                summary_to_string(&summary)?
            };
            println!("{}", json);
        }
        None => {}
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(48));
        println!("BLOCK SUMMARY");
        println!("{}", "=".repeat(48));
        print!("{}", render_text_summary(&summary));
        println!("{}", "=".repeat(48));
    }

    info!("Humanize completed in {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(summary)
}

/// Validate humanize arguments
///
/// **Public** - can be called before execute_humanize for early validation
pub fn validate_args(args: &HumanizeArgs) -> Result<()> {
    if args.block_path.as_os_str().is_empty() {
        anyhow::bail!("Block path cannot be empty");
    }

    if let Some(output) = &args.output_json {
        validate_path(output).context("Invalid output path")?;

        if output == &args.block_path {
            anyhow::bail!("Output path must differ from the block path");
        }
    }

    Ok(())
}
