//! Pairwise Pearson correlation over a selected column set.

use serde::{Deserialize, Serialize};

use crate::input::Dataset;

/// One cell of the correlation grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationEntry {
    /// Row label (column name).
    pub row: String,
    /// Column label (column name).
    pub col: String,
    /// Pearson coefficient in [-1, 1]; 0 for undefined pairs.
    pub coefficient: f64,
}

/// A k x k correlation grid over k selected columns.
///
/// Deliberately redundant: the diagonal and both (i,j)/(j,i) mirror entries
/// are materialized, since the consumer is a heat-map-style display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub entries: Vec<CorrelationEntry>,
}

impl CorrelationMatrix {
    /// Look up the coefficient for a labeled pair.
    pub fn coefficient(&self, row: &str, col: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.row == row && e.col == col)
            .map(|e| e.coefficient)
    }
}

/// Computes correlation matrices. Pure and stateless.
pub struct CorrelationEngine;

impl CorrelationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build the full grid for the selected columns, in selection order.
    /// Diagonal entries are pinned to 1 without computation; each off-diagonal
    /// pair is computed once and emitted in both orientations.
    pub fn matrix(&self, dataset: &Dataset, columns: &[String]) -> CorrelationMatrix {
        let mut entries = Vec::with_capacity(columns.len() * columns.len());

        for i in 0..columns.len() {
            for j in i..columns.len() {
                let coefficient = if i == j {
                    1.0
                } else {
                    self.pearson(dataset, &columns[i], &columns[j])
                };
                entries.push(CorrelationEntry {
                    row: columns[i].clone(),
                    col: columns[j].clone(),
                    coefficient,
                });
                if i != j {
                    entries.push(CorrelationEntry {
                        row: columns[j].clone(),
                        col: columns[i].clone(),
                        coefficient,
                    });
                }
            }
        }

        CorrelationMatrix {
            columns: columns.to_vec(),
            entries,
        }
    }

    /// Pearson correlation between two columns' numeric views.
    ///
    /// Each column is filtered for non-numeric cells independently, NOT
    /// row-synchronized; if the surviving vectors differ in length the pair
    /// is reported as 0. A zero or non-finite denominator also yields 0 --
    /// NaN never reaches the caller.
    pub fn pearson(&self, dataset: &Dataset, col_a: &str, col_b: &str) -> f64 {
        let a = dataset.numeric_column_by_name(col_a).unwrap_or_default();
        let b = dataset.numeric_column_by_name(col_b).unwrap_or_default();

        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }

        let mean_a = a.iter().sum::<f64>() / a.len() as f64;
        let mean_b = b.iter().sum::<f64>() / b.len() as f64;

        let dev_a: Vec<f64> = a.iter().map(|v| v - mean_a).collect();
        let dev_b: Vec<f64> = b.iter().map(|v| v - mean_b).collect();

        let sum_sq_a: f64 = dev_a.iter().map(|v| v * v).sum();
        let sum_sq_b: f64 = dev_b.iter().map(|v| v * v).sum();

        let numerator: f64 = dev_a.iter().zip(&dev_b).map(|(x, y)| x * y).sum();
        let coefficient = numerator / (sum_sq_a * sum_sq_b).sqrt();

        if coefficient.is_finite() {
            coefficient
        } else {
            0.0
        }
    }
}

impl Default for CorrelationEngine {
    fn default() -> Self {
        Self::new()
    }
}
