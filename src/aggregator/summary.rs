//! Block and transaction-list summarization.
//!
//! A single pass classifies every transaction, decodes its value and gas
//! cost, and collects both series for [`calculate_series_stats`]. Any
//! decoding failure aborts the whole summary; there are no partial results.

use super::metrics::calculate_series_stats;
use super::schema::{
    BlockSummary, BlockTransactions, CategoryCounts, TransactionRecord, TransactionValues,
    TransactionsSummary,
};
use crate::calendar::{block_time, daytime_for_hour, format_block_time, season_for_month};
use crate::classifier::classify_transaction;
use crate::parser::quantity::{decode_big_int_field, hex_to_decimal};
use crate::parser::schema::{BigNumber, EthBlock, EthTransaction};
use crate::utils::config::{GAS_LIMIT_FIELD, GAS_PRICE_FIELD, VALUE_FIELD, WEI_PER_UNIT};
use crate::utils::error::DecodeError;
use chrono::{Datelike, Timelike};
use log::{debug, info};

/// Summarize a full block
///
/// **Public** - main entry point
///
/// # Errors
/// * `DecodeError::MissingField` / `DecodeError::InvalidHex` - a transaction
///   amount could not be decoded
/// * `DecodeError::TimestampOutOfRange` - block timestamp has no calendar date
pub fn summarize_block(block: &EthBlock) -> Result<BlockSummary, DecodeError> {
    debug!("Summarizing block {}", block.number);

    let TransactionsSummary { types, values } = summarize_transactions(&block.transactions)?;

    let time = block_time(block.timestamp)?;
    let season = season_for_month(time.month0());
    let daytime = daytime_for_hour(time.hour());

    info!(
        "Block {}: {} transactions, {} {}",
        block.number,
        block.transactions.len(),
        season,
        daytime
    );

    Ok(BlockSummary {
        number: block.number,
        season,
        daytime,
        time: format_block_time(&time),
        transactions: BlockTransactions {
            total: block.transactions.len(),
            types,
            values,
        },
    })
}

/// Summarize a list of transactions
///
/// **Public** - classification counts plus value and gas statistics
///
/// Records keep the input order.
pub fn summarize_transactions(
    transactions: &[EthTransaction],
) -> Result<TransactionsSummary, DecodeError> {
    let mut types = CategoryCounts::default();
    let mut values = Vec::with_capacity(transactions.len());
    let mut gas_costs = Vec::with_capacity(transactions.len());
    let mut data = Vec::with_capacity(transactions.len());

    for transaction in transactions {
        let category = classify_transaction(transaction);
        types.record(category);

        let gas = transaction_gas_cost(transaction)?;
        let value = transaction_value(transaction)?;
        values.push(value);
        gas_costs.push(gas);

        data.push(TransactionRecord {
            hash: transaction.hash.clone(),
            category,
            value,
            gas,
        });
    }

    let value_stats = calculate_series_stats(&values);
    let gas_stats = calculate_series_stats(&gas_costs);

    debug!("Value: {}", value_stats.summary());
    debug!("Gas: {}", gas_stats.summary());

    Ok(TransactionsSummary {
        types,
        values: TransactionValues {
            value: value_stats.into(),
            gas: gas_stats.into(),
            data,
        },
    })
}

/// Transaction value in decimal units (wei / 10^18)
pub fn transaction_value(transaction: &EthTransaction) -> Result<f64, DecodeError> {
    let value = required_hex(transaction, transaction.value.as_ref(), VALUE_FIELD)?;
    hex_to_decimal(VALUE_FIELD, value)
}

/// Transaction gas cost
///
/// **Public** - price and limit are each scaled down by 10^18, multiplied,
/// then scaled back up once, giving `price_wei * limit_wei / 10^18`
/// under floating-point evaluation in that order.
pub fn transaction_gas_cost(transaction: &EthTransaction) -> Result<f64, DecodeError> {
    let gas_price = required_hex(transaction, transaction.gas_price.as_ref(), GAS_PRICE_FIELD)?;
    let gas_limit = required_hex(transaction, transaction.gas_limit_field(), GAS_LIMIT_FIELD)?;

    let gas_price = hex_to_decimal(GAS_PRICE_FIELD, gas_price)?;
    let gas_limit = hex_to_decimal(GAS_LIMIT_FIELD, gas_limit)?;

    Ok(gas_price * gas_limit * WEI_PER_UNIT)
}

fn required_hex<'a>(
    transaction: &EthTransaction,
    field: Option<&'a BigNumber>,
    name: &str,
) -> Result<&'a str, DecodeError> {
    decode_big_int_field(field).ok_or_else(|| DecodeError::MissingField {
        field: name.to_string(),
        hash: transaction.hash.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Daytime, Season};
    use crate::classifier::Category;

    fn tx(hash: &str, data: &str, value: &str) -> EthTransaction {
        EthTransaction {
            hash: hash.to_string(),
            to: Some("0x7a250d5630b4cf539739df2c5dacb4c659f2488d".to_string()),
            data: Some(data.to_string()),
            value: Some(BigNumber::from_hex(value)),
            gas_price: Some(BigNumber::from_hex("0x1d326c2600")),
            gas_limit: Some(BigNumber::from_hex("0x03c164")),
            ..Default::default()
        }
    }

    #[test]
    fn test_gas_cost_formula() {
        let gas = transaction_gas_cost(&tx("0x1", "0x", "0x00")).unwrap();
        let expected = (125_400_000_000.0 / WEI_PER_UNIT) * (246_116.0 / WEI_PER_UNIT) * WEI_PER_UNIT;
        assert_eq!(gas, expected);
        assert!((gas - 0.0308629464).abs() < 1e-12);
    }

    #[test]
    fn test_missing_gas_price() {
        let mut transaction = tx("0xdead", "0x", "0x00");
        transaction.gas_price = None;

        assert_eq!(
            transaction_gas_cost(&transaction),
            Err(DecodeError::MissingField {
                field: GAS_PRICE_FIELD.to_string(),
                hash: "0xdead".to_string(),
            })
        );
    }

    #[test]
    fn test_malformed_value_aborts_summary() {
        let transactions = vec![tx("0x1", "0x", "0x01"), tx("0x2", "0x", "0xnothex")];
        let result = summarize_transactions(&transactions);

        assert!(matches!(result, Err(DecodeError::InvalidHex { .. })));
    }

    #[test]
    fn test_summarize_transactions_preserves_order() {
        let transactions = vec![
            tx("0x1", "0xa9059cbb", "0x00"),
            tx("0x2", "0x", "0x0de0b6b3a7640000"),
            tx("0x3", "0x38ed1739", "0x00"),
        ];
        let summary = summarize_transactions(&transactions).unwrap();

        let hashes: Vec<_> = summary.values.data.iter().map(|r| r.hash.as_str()).collect();
        assert_eq!(hashes, vec!["0x1", "0x2", "0x3"]);

        let categories: Vec<_> = summary.values.data.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![Category::Erc20, Category::Transfer, Category::Unrecognized]
        );
        assert_eq!(summary.types.total(), 3);
        assert_eq!(summary.values.value.max_value, Some(1.0));
        assert_eq!(summary.values.value.median_value, Some(0.0));
    }

    #[test]
    fn test_summarize_empty_block() {
        let block = EthBlock {
            number: 1,
            timestamp: 1_636_654_800,
            ..Default::default()
        };
        let summary = summarize_block(&block).unwrap();

        assert_eq!(summary.transactions.total, 0);
        assert_eq!(summary.transactions.types, CategoryCounts::default());
        assert_eq!(summary.transactions.values.value.avg_value, None);
        assert_eq!(summary.transactions.values.gas.median_gas, None);
        assert_eq!(summary.transactions.values.gas.sum_gas, 0.0);
        assert_eq!(summary.season, Season::Autumn);
        assert_eq!(summary.daytime, Daytime::Evening);
        assert_eq!(summary.time, "2021-11-11T18:20:00.000Z");
    }
}
