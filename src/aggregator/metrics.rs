//! Descriptive statistics over a numeric series.
//!
//! The functions here know nothing about transactions; they operate on any
//! ordered `f64` sequence. An empty series has no average, median or
//! extrema, so those come back as `None` while the sum is `0.0`.

use log::debug;

/// Summary statistics of one numeric series
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesStats {
    /// Number of samples
    pub count: usize,

    /// Left-to-right sum of the samples
    pub sum: f64,

    /// `sum / count`
    pub average: Option<f64>,

    /// Middle sample, or mean of the two middle samples for even counts
    pub median: Option<f64>,

    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Calculate statistics for a series
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `samples` - Series in any order; it is not modified
pub fn calculate_series_stats(samples: &[f64]) -> SeriesStats {
    debug!("Calculating statistics over {} samples", samples.len());

    SeriesStats {
        count: samples.len(),
        sum: sum(samples),
        average: average(samples),
        median: median(samples),
        min: minimum(samples),
        max: maximum(samples),
    }
}

pub fn sum(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0, |acc, sample| acc + sample)
}

pub fn average(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(sum(samples) / samples.len() as f64)
}

/// Median of a series
///
/// **Public** - sorts a copy ascending
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 != 0 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

pub fn minimum(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::min)
}

pub fn maximum(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::max)
}

impl SeriesStats {
    /// Whether the series had no samples
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let fmt = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{:.6}", v));
        format!(
            "Count: {} | Sum: {:.6} | Avg: {} | Median: {} | Min: {} | Max: {}",
            self.count,
            self.sum,
            fmt(self.average),
            fmt(self.median),
            fmt(self.min),
            fmt(self.max)
        )
    }
}
