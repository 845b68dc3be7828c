//! Descriptive statistics over a single column's numeric view.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::Dataset;

/// Summary statistics for one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub mean: f64,
    /// Lower median: the value at index floor(n/2) of the sorted view.
    pub median: f64,
    /// Most frequent value, leftmost on ties.
    pub mode: f64,
    /// Population standard deviation (divisor n).
    pub std_dev: f64,
    /// Distinct value -> occurrence count, keyed by the value's decimal
    /// rendering, in first-seen order.
    pub frequency: IndexMap<String, usize>,
}

impl ColumnSummary {
    /// Population variance (std_dev squared).
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Render the four summary statistics as a two-column CSV at two
    /// decimal places.
    pub fn to_csv(&self) -> String {
        format!(
            "Statistic,Value\nMean,{:.2}\nMedian,{:.2}\nMode,{:.2}\nStandard Deviation,{:.2}",
            self.mean, self.median, self.mode, self.std_dev
        )
    }
}

/// Computes [`ColumnSummary`] values. Pure: no state, no side effects.
pub struct StatisticsEngine;

impl StatisticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Summarize a column by name. Returns `None` when the column is not in
    /// the header or its numeric view is empty ("no data", not an error).
    pub fn describe(&self, dataset: &Dataset, column: &str) -> Option<ColumnSummary> {
        let values = dataset.numeric_column_by_name(column)?;
        if values.is_empty() {
            return None;
        }

        let mean = mean(&values);
        let median = lower_median(&values);
        let mode = mode(&values);
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        let std_dev = variance.sqrt();

        let mut frequency: IndexMap<String, usize> = IndexMap::new();
        for v in &values {
            *frequency.entry(format!("{}", v)).or_insert(0) += 1;
        }

        Some(ColumnSummary {
            mean,
            median,
            mode,
            std_dev,
            frequency,
        })
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Arithmetic mean. Callers guarantee a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Lower median: the element at index floor(n/2) after an ascending sort.
/// For even n this is NOT the interpolated midpoint.
pub(crate) fn lower_median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted[sorted.len() / 2]
}

/// Most frequent value via a best-so-far scan: the accumulator starts at the
/// first value and is only displaced by a strictly more frequent candidate,
/// so the leftmost value wins ties.
pub(crate) fn mode(values: &[f64]) -> f64 {
    let count = |x: f64| values.iter().filter(|&&v| v == x).count();
    values
        .iter()
        .copied()
        .fold(values[0], |best, candidate| {
            if count(best) >= count(candidate) {
                best
            } else {
                candidate
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_column(values: &[&str]) -> Dataset {
        Dataset::new(
            vec!["v".into()],
            values.iter().map(|v| vec![v.to_string()]).collect(),
        )
    }

    #[test]
    fn test_reference_column() {
        // [1,2,2,3,4]: mean 2.4, lower-median 2, mode 2, stddev ~1.0198
        let dataset = single_column(&["1", "2", "2", "3", "4"]);
        let summary = StatisticsEngine::new().describe(&dataset, "v").unwrap();

        assert!((summary.mean - 2.4).abs() < 1e-12);
        assert_eq!(summary.median, 2.0);
        assert_eq!(summary.mode, 2.0);
        assert!((summary.std_dev - 1.0198039027185569).abs() < 1e-9);
    }

    #[test]
    fn test_lower_median_even_count() {
        // Sorted [1,2,3,4]: index 2 -> 3, not the interpolated 2.5.
        let dataset = single_column(&["4", "1", "3", "2"]);
        let summary = StatisticsEngine::new().describe(&dataset, "v").unwrap();
        assert_eq!(summary.median, 3.0);
    }

    #[test]
    fn test_mode_leftmost_on_tie() {
        let dataset = single_column(&["5", "7", "5", "7"]);
        let summary = StatisticsEngine::new().describe(&dataset, "v").unwrap();
        assert_eq!(summary.mode, 5.0);
    }

    #[test]
    fn test_unknown_column_is_no_data() {
        let dataset = single_column(&["1"]);
        assert!(StatisticsEngine::new().describe(&dataset, "nope").is_none());
    }

    #[test]
    fn test_non_numeric_column_is_no_data() {
        let dataset = single_column(&["a", "b"]);
        assert!(StatisticsEngine::new().describe(&dataset, "v").is_none());
    }

    #[test]
    fn test_frequency_histogram() {
        let dataset = single_column(&["1", "2", "2", "3"]);
        let summary = StatisticsEngine::new().describe(&dataset, "v").unwrap();
        assert_eq!(summary.frequency.get("2"), Some(&2));
        assert_eq!(summary.frequency.get("1"), Some(&1));
        assert_eq!(summary.frequency.len(), 3);
    }

    #[test]
    fn test_statistics_csv_export() {
        let dataset = single_column(&["1", "2", "2", "3", "4"]);
        let summary = StatisticsEngine::new().describe(&dataset, "v").unwrap();
        let csv = summary.to_csv();
        assert!(csv.starts_with("Statistic,Value\nMean,2.40"));
        assert!(csv.contains("Standard Deviation,1.02"));
    }
}
