//! Aggregation of block transactions into humanized summaries.
//!
//! This module transforms parsed blocks into:
//! - Category counts (erc20 / nft / transfer / unrecognized)
//! - Value and gas statistics (average, median, min, max, sum)
//! - Per-transaction rows in block order

pub mod metrics;
pub mod schema;
pub mod summary;

// Re-export main types and functions
pub use metrics::{calculate_series_stats, SeriesStats};
pub use schema::{
    BlockSummary, BlockTransactions, CategoryCounts, GasStats, TransactionRecord,
    TransactionValues, TransactionsSummary, ValueStats,
};
pub use summary::{summarize_block, summarize_transactions, transaction_gas_cost, transaction_value};
