//! Classify and calendar commands.

use crate::calendar::{block_time, classify_daytime, classify_season, format_block_time};
use crate::classifier::{classify_transaction, Category};
use crate::parser::read_block;
use anyhow::{Context, Result};
use std::path::Path;

/// Classify every transaction of a block file
///
/// **Public** - returns `(hash, category)` in block order
pub fn classify_block_file(block_path: &Path) -> Result<Vec<(String, Category)>> {
    let block = read_block(block_path)
        .with_context(|| format!("Failed to read block from {}", block_path.display()))?;

    Ok(block
        .transactions
        .iter()
        .map(|tx| (tx.hash.clone(), classify_transaction(tx)))
        .collect())
}

/// Execute the classify command
pub fn execute_classify(block_path: &Path) -> Result<()> {
    for (hash, category) in classify_block_file(block_path)? {
        println!("{}  {}", hash, category);
    }
    Ok(())
}

/// Execute the calendar command
pub fn execute_calendar(timestamp: i64) -> Result<()> {
    let time = block_time(timestamp).context("Invalid timestamp")?;
    let season = classify_season(timestamp)?;
    let daytime = classify_daytime(timestamp)?;

    println!("Time:    {}", format_block_time(&time));
    println!("Season:  {}", season);
    println!("Daytime: {}", daytime);

    Ok(())
}
