//! Dataset quality assessment: completeness, type consistency, outliers,
//! duplicate rows.

use std::collections::HashSet;

use crate::input::Dataset;

use super::report::{Finding, FindingKind, QualityReport};

/// IQR fence multiplier for outlier detection.
const IQR_MULTIPLIER: f64 = 1.5;

/// Assesses datasets and produces [`QualityReport`]s. Deterministic given
/// identical input; no side effects.
pub struct QualityAssessor;

impl QualityAssessor {
    pub fn new() -> Self {
        Self
    }

    /// Assess the dataset. Findings are ordered: per-column missing-value and
    /// type-consistency issues in header order, then per-column outlier
    /// counts, then duplicate rows.
    pub fn assess(&self, dataset: &Dataset) -> QualityReport {
        let mut findings = Vec::new();

        let row_count = dataset.row_count();
        let total_cells = dataset.column_count() * row_count;
        let mut empty_cells = 0usize;

        for (index, header) in dataset.headers.iter().enumerate() {
            let missing = dataset.column_values(index).filter(|v| v.is_empty()).count();
            empty_cells += missing;

            if missing > 0 {
                let pct = (missing as f64 / row_count as f64) * 100.0;
                findings.push(Finding::new(
                    FindingKind::MissingValues,
                    Some(header.clone()),
                    format!(
                        "Column \"{}\" has {} missing values ({:.2}%)",
                        header, missing, pct
                    ),
                ));
            }

            if self.has_mixed_types(dataset, index) {
                findings.push(Finding::new(
                    FindingKind::InconsistentTypes,
                    Some(header.clone()),
                    format!("Column \"{}\" has inconsistent data types", header),
                ));
            }
        }

        let completeness = if total_cells == 0 {
            100.0
        } else {
            ((total_cells - empty_cells) as f64 / total_cells as f64) * 100.0
        };

        for (index, header) in dataset.headers.iter().enumerate() {
            let outliers = self.count_outliers(&dataset.numeric_column(index));
            if outliers > 0 {
                findings.push(Finding::new(
                    FindingKind::Outliers,
                    Some(header.clone()),
                    format!("Column \"{}\" has {} potential outliers", header, outliers),
                ));
            }
        }

        let duplicate_rows = self.count_duplicate_rows(dataset);
        if duplicate_rows > 0 {
            findings.push(Finding::new(
                FindingKind::DuplicateRows,
                None,
                format!("Dataset contains {} duplicate rows", duplicate_rows),
            ));
        }

        QualityReport {
            completeness,
            findings,
            duplicate_rows,
        }
    }

    /// True when a column's non-empty cells span both numeric and text
    /// classifications.
    fn has_mixed_types(&self, dataset: &Dataset, index: usize) -> bool {
        let mut saw_numeric = false;
        let mut saw_text = false;

        for value in dataset.column_values(index) {
            if value.is_empty() {
                continue;
            }
            if value.trim().parse::<f64>().is_ok() {
                saw_numeric = true;
            } else {
                saw_text = true;
            }
            if saw_numeric && saw_text {
                return true;
            }
        }

        false
    }

    /// IQR outlier count with simple positional quartiles: after an ascending
    /// sort, Q1 = sorted[floor(n/4)] and Q3 = sorted[floor(3n/4)] -- no
    /// interpolation.
    fn count_outliers(&self, values: &[f64]) -> usize {
        if values.is_empty() {
            return 0;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let q1 = sorted[n / 4];
        let q3 = sorted[n * 3 / 4];
        let iqr = q3 - q1;
        let lower = q1 - IQR_MULTIPLIER * iqr;
        let upper = q3 + IQR_MULTIPLIER * iqr;

        sorted.iter().filter(|&&v| v < lower || v > upper).count()
    }

    /// Duplicate count by deep row equality: total rows minus unique rows.
    fn count_duplicate_rows(&self, dataset: &Dataset) -> usize {
        let unique: HashSet<&Vec<String>> = dataset.rows.iter().collect();
        dataset.row_count() - unique.len()
    }
}

impl Default for QualityAssessor {
    fn default() -> Self {
        Self::new()
    }
}
