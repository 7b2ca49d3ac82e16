//! Block Humanizer CLI
//!
//! Summarizes Ethereum block JSON into transaction categories,
//! value/gas statistics and calendar labels.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use eth_block_humanizer::commands::{
    display_schema, display_version, execute_calendar, execute_classify, execute_humanize,
    validate_args, validate_summary_file, HumanizeArgs,
};

/// Block Humanizer - humanized summaries of Ethereum blocks
#[derive(Parser, Debug)]
#[command(name = "block-humanizer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a block
    Humanize {
        /// Path to block JSON (bare block or JSON-RPC response)
        #[arg(short, long, env = "BLOCK_HUMANIZER_BLOCK")]
        block: PathBuf,

        /// Output path for the JSON summary (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Print the category of every transaction in a block
    Classify {
        /// Path to block JSON
        #[arg(short, long)]
        block: PathBuf,
    },

    /// Show season and daytime for a UNIX timestamp
    Calendar {
        /// Seconds since the epoch
        #[arg(short, long, allow_negative_numbers = true)]
        timestamp: i64,
    },

    /// Validate a summary JSON file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Humanize {
            block,
            output,
            compact,
            summary,
        } => {
            let args = HumanizeArgs {
                block_path: block,
                output_json: output,
                compact,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_humanize(&args)?;
        }

        Commands::Classify { block } => {
            execute_classify(&block)?;
        }

        Commands::Calendar { timestamp } => {
            execute_calendar(timestamp)?;
        }

        Commands::Validate { file } => {
            validate_summary_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
