use anyhow::Result;
use std::path::PathBuf;
use crate::output::read_summary;
use crate::utils::config::SUMMARY_SCHEMA_VERSION;

/// Validate a summary JSON file
pub fn validate_summary_file(file_path: PathBuf) -> Result<()> {
    println!("Validating summary: {}", file_path.display());

    let summary = read_summary(&file_path)?;

    println!("✓ Valid summary JSON");
    println!("  Block: {}", summary.number);
    println!("  Time: {}", summary.time);
    println!("  Transactions: {}", summary.transactions.total);

    let counted = summary.transactions.types.total();
    if counted != summary.transactions.total {
        anyhow::bail!(
            "Category counts sum to {} but the summary lists {} transactions",
            counted,
            summary.transactions.total
        );
    }

    if summary.transactions.values.data.len() != summary.transactions.total {
        anyhow::bail!(
            "Summary lists {} transactions but has {} data rows",
            summary.transactions.total,
            summary.transactions.values.data.len()
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Block Humanizer Summary Schema");
    println!("Current Version: {}", SUMMARY_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  number: number           - Block number");
        println!("  season: string           - winter | spring | summer | autumn");
        println!("  daytime: string          - night | morning | afterday | evening (UTC)");
        println!("  time: string             - ISO 8601 block time");
        println!("  transactions: object");
        println!("    total: number          - Transaction count");
        println!("    types: object          - Counts for erc20, nft, transfer, unrecognized");
        println!("    values: object");
        println!("      value: object        - avgValue, minValue, medianValue, maxValue, sumValue");
        println!("      gas: object          - avgGas, medianGas, minGas, maxGas, sumGas");
        println!("      data: array          - {{ hash, type, value, gas }} per transaction");
        println!();
        println!("Averages, medians and extrema are null for blocks without transactions.");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Block Humanizer v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SUMMARY_SCHEMA_VERSION);
    println!();
    println!("Humanized summaries of Ethereum blocks.");
}
