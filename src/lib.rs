//! Ethereum Block Humanizer
//!
//! Turns a block and its transactions into a humanized summary:
//! transaction categories, value and gas statistics, and the
//! season and time of day the block was produced.
//!
//! ## Getting Started
//!
//! ```ignore
//! use eth_block_humanizer::{parse_block_str, summarize_block};
//!
//! let block = parse_block_str(&json)?;
//! let summary = summarize_block(&block)?;
//! println!("{} transactions, {}", summary.transactions.total, summary.season);
//! ```
//!
//! The library performs no I/O beyond the optional file helpers in
//! [`parser::read_block`] and [`output`]; every summary is computed fresh
//! from the block passed in.

pub mod aggregator;
pub mod calendar;
pub mod classifier;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use aggregator::{summarize_block, summarize_transactions, BlockSummary, TransactionsSummary};
pub use calendar::{classify_daytime, classify_season, Daytime, Season};
pub use classifier::{classify_transaction, Category};
pub use parser::{parse_block, parse_block_str, EthBlock, EthTransaction};
pub use utils::error::DecodeError;
