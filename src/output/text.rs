//! Plain-text rendering of a block summary.

use crate::aggregator::schema::BlockSummary;
use crate::classifier::Category;

/// Render a summary for terminal output
///
/// **Public** - used by `humanize --summary`
pub fn render_text_summary(summary: &BlockSummary) -> String {
    let mut out = String::new();
    let txs = &summary.transactions;

    out.push_str(&format!("Block:        {}\n", summary.number));
    out.push_str(&format!("Time:         {}\n", summary.time));
    out.push_str(&format!(
        "Season:       {} ({})\n",
        summary.season, summary.daytime
    ));
    out.push_str(&format!("Transactions: {}\n", txs.total));

    out.push_str("\nCategories:\n");
    for category in Category::ALL {
        let count = txs.types.get(category);
        out.push_str(&format!(
            "  {:<14} {:>6} {:>6.1}%\n",
            category.as_str(),
            count,
            percentage(count, txs.total)
        ));
    }

    let value = &txs.values.value;
    let gas = &txs.values.gas;

    out.push_str("\n                 value            gas\n");
    out.push_str(&row("avg", value.avg_value, gas.avg_gas));
    out.push_str(&row("median", value.median_value, gas.median_gas));
    out.push_str(&row("min", value.min_value, gas.min_gas));
    out.push_str(&row("max", value.max_value, gas.max_gas));
    out.push_str(&row("sum", Some(value.sum_value), Some(gas.sum_gas)));

    out
}

fn percentage(count: usize, total: usize) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn row(label: &str, value: Option<f64>, gas: Option<f64>) -> String {
    format!("  {:<8} {:>14} {:>14}\n", label, cell(value), cell(gas))
}

fn cell(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |v| format!("{:.6}", v))
}
