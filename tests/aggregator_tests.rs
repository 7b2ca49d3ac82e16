use eth_block_humanizer::aggregator::metrics::{calculate_series_stats, median};
use eth_block_humanizer::aggregator::{summarize_block, summarize_transactions, transaction_gas_cost};
use eth_block_humanizer::calendar::{Daytime, Season};
use eth_block_humanizer::parser::{read_block, BigNumber, EthBlock, EthTransaction};
use eth_block_humanizer::DecodeError;
use pretty_assertions::assert_eq;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/block_13596479.json");

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("statistic should be present");
    assert!(
        (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
        "expected {} got {}",
        expected,
        actual
    );
}

fn swap_tx(hash: &str) -> EthTransaction {
    EthTransaction {
        hash: hash.to_string(),
        to: Some("0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D".to_string()),
        data: Some("0x38ed1739".to_string()),
        value: Some(BigNumber::from_hex("0x00")),
        gas_price: Some(BigNumber::from_hex("0x1d326c2600")),
        gas_limit: Some(BigNumber::from_hex("0x03c164")),
        ..Default::default()
    }
}

#[test]
fn test_fixture_block_summary() {
    let block = read_block(FIXTURE).unwrap();
    let summary = summarize_block(&block).unwrap();

    assert_eq!(summary.number, 13_596_479);
    assert_eq!(summary.season, Season::Autumn);
    assert_eq!(summary.daytime, Daytime::Evening);
    assert_eq!(summary.time, "2021-11-11T18:20:00.000Z");

    let txs = &summary.transactions;
    assert_eq!(txs.total, 4);
    assert_eq!(txs.types.erc20, 1);
    assert_eq!(txs.types.nft, 1);
    assert_eq!(txs.types.transfer, 1);
    assert_eq!(txs.types.unrecognized, 1);

    assert_close(Some(txs.values.value.sum_value), 22.1);
    assert_close(txs.values.value.avg_value, 5.525);
    assert_close(txs.values.value.median_value, 0.05);
    assert_close(txs.values.value.min_value, 0.0);
    assert_close(txs.values.value.max_value, 22.0);

    assert_close(Some(txs.values.gas.sum_gas), 0.0638258928);
    assert_close(txs.values.gas.avg_gas, 0.0159564732);
    assert_close(txs.values.gas.median_gas, 0.0159564732);
    assert_close(txs.values.gas.min_gas, 0.00105);
    assert_close(txs.values.gas.max_gas, 0.0308629464);
}

#[test]
fn test_two_transactions_pinned_gas() {
    let transactions = vec![swap_tx("0x1"), swap_tx("0x2")];
    let summary = summarize_transactions(&transactions).unwrap();

    for record in &summary.values.data {
        assert!((record.gas - 0.0308629464).abs() < 1e-15);
    }
    assert_close(Some(summary.values.gas.sum_gas), 0.0617258928);
    assert_close(summary.values.gas.avg_gas, 0.0308629464);
    assert_close(summary.values.gas.median_gas, 0.0308629464);
    assert_eq!(summary.types.unrecognized, 2);
}

#[test]
fn test_gas_cost_is_not_plain_wei() {
    let gas = transaction_gas_cost(&swap_tx("0x1")).unwrap();
    // price_wei * limit_wei / 10^18, not price_wei * limit_wei
    assert!((gas - 125_400_000_000.0 * 246_116.0 / 1e18).abs() < 1e-15);
}

#[test]
fn test_category_counts_sum_to_total() {
    let block = read_block(FIXTURE).unwrap();
    let summary = summarize_block(&block).unwrap();

    assert_eq!(summary.transactions.types.total(), summary.transactions.total);
    assert_eq!(summary.transactions.values.data.len(), summary.transactions.total);
}

#[test]
fn test_summarize_block_is_idempotent() {
    let block = read_block(FIXTURE).unwrap();
    let before = block.clone();

    let first = summarize_block(&block).unwrap();
    let second = summarize_block(&block).unwrap();

    assert_eq!(first, second);
    assert_eq!(block, before);
}

#[test]
fn test_empty_block_uses_null_statistics() {
    let block = EthBlock {
        number: 7,
        timestamp: 1_636_654_800,
        ..Default::default()
    };
    let summary = summarize_block(&block).unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["transactions"]["total"], 0);
    assert!(json["transactions"]["values"]["value"]["avgValue"].is_null());
    assert!(json["transactions"]["values"]["value"]["medianValue"].is_null());
    assert!(json["transactions"]["values"]["gas"]["minGas"].is_null());
    assert!(json["transactions"]["values"]["gas"]["maxGas"].is_null());
    assert_eq!(json["transactions"]["values"]["gas"]["sumGas"], 0.0);
}

#[test]
fn test_missing_gas_limit_fails_whole_block() {
    let mut broken = swap_tx("0xbroken");
    broken.gas_limit = None;

    let block = EthBlock {
        number: 1,
        timestamp: 0,
        transactions: vec![swap_tx("0xok"), broken],
        ..Default::default()
    };

    assert_eq!(
        summarize_block(&block),
        Err(DecodeError::MissingField {
            field: "gasLimit".to_string(),
            hash: "0xbroken".to_string(),
        })
    );
}

#[test]
fn test_unrepresentable_timestamp_fails() {
    let block = EthBlock {
        number: 1,
        timestamp: i64::MAX,
        ..Default::default()
    };
    assert_eq!(
        summarize_block(&block),
        Err(DecodeError::TimestampOutOfRange(i64::MAX))
    );
}

#[test]
fn test_median_law() {
    let odd = [9.0, 2.0, 7.0, 4.0, 5.0];
    assert_eq!(median(&odd), Some(5.0));

    let even = [9.0, 2.0, 7.0, 4.0];
    assert_eq!(median(&even), Some((4.0 + 7.0) / 2.0));
}

#[test]
fn test_series_stats_generic_over_any_series() {
    let stats = calculate_series_stats(&[1.5, -2.0, 0.5]);

    assert_eq!(stats.count, 3);
    assert_close(Some(stats.sum), 0.0);
    assert_eq!(stats.min, Some(-2.0));
    assert_eq!(stats.max, Some(1.5));
    assert_eq!(stats.median, Some(0.5));
}
