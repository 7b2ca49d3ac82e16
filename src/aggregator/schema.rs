//! Output schema for humanized block summaries.
//!
//! Field names and nesting are part of the output contract:
//! consumers key category counts by name and read `value`/`gas`
//! statistics under camelCase names such as `avgValue` and `sumGas`.

use super::metrics::SeriesStats;
use crate::calendar::{Daytime, Season};
use crate::classifier::Category;
use serde::{Deserialize, Serialize};

/// Top-level humanized block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSummary {
    /// Block number
    pub number: u64,

    pub season: Season,

    pub daytime: Daytime,

    /// ISO-8601 UTC block time with millisecond precision
    pub time: String,

    pub transactions: BlockTransactions,
}

/// Transaction section of a block summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTransactions {
    /// Number of transactions in the block
    pub total: usize,

    pub types: CategoryCounts,

    pub values: TransactionValues,
}

/// Result of summarizing a transaction list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsSummary {
    pub types: CategoryCounts,
    pub values: TransactionValues,
}

/// Number of transactions per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub erc20: usize,
    pub nft: usize,
    pub transfer: usize,
    pub unrecognized: usize,
}

impl CategoryCounts {
    /// Count one more transaction of `category`
    pub fn record(&mut self, category: Category) {
        *self.slot(category) += 1;
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Erc20 => self.erc20,
            Category::Nft => self.nft,
            Category::Transfer => self.transfer,
            Category::Unrecognized => self.unrecognized,
        }
    }

    /// Sum over all categories
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Erc20 => &mut self.erc20,
            Category::Nft => &mut self.nft,
            Category::Transfer => &mut self.transfer,
            Category::Unrecognized => &mut self.unrecognized,
        }
    }
}

/// Aggregate statistics plus the per-transaction rows they were built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionValues {
    pub value: ValueStats,
    pub gas: GasStats,
    pub data: Vec<TransactionRecord>,
}

/// Statistics of transaction values in decimal units.
/// Averages, medians and extrema are `null` for an empty block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueStats {
    pub avg_value: Option<f64>,
    pub min_value: Option<f64>,
    pub median_value: Option<f64>,
    pub max_value: Option<f64>,
    pub sum_value: f64,
}

/// Statistics of transaction gas cost in decimal units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasStats {
    pub avg_gas: Option<f64>,
    pub median_gas: Option<f64>,
    pub min_gas: Option<f64>,
    pub max_gas: Option<f64>,
    pub sum_gas: f64,
}

impl From<SeriesStats> for ValueStats {
    fn from(stats: SeriesStats) -> Self {
        Self {
            avg_value: stats.average,
            min_value: stats.min,
            median_value: stats.median,
            max_value: stats.max,
            sum_value: stats.sum,
        }
    }
}

impl From<SeriesStats> for GasStats {
    fn from(stats: SeriesStats) -> Self {
        Self {
            avg_gas: stats.average,
            median_gas: stats.median,
            min_gas: stats.min,
            max_gas: stats.max,
            sum_gas: stats.sum,
        }
    }
}

/// One transaction's category and decimal amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub hash: String,

    #[serde(rename = "type")]
    pub category: Category,

    pub value: f64,

    pub gas: f64,
}
