//! Transform tasks that can be queued against a dataset.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// How to fill empty cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum FillMethod {
    /// Column mean over the numeric view.
    Mean,
    /// Column lower-median over the numeric view.
    Median,
    /// Column mode over the numeric view, leftmost on ties.
    Mode,
    /// A caller-supplied constant.
    Custom { value: String },
}

/// A transformation task. Tasks are pure: applying one produces a new
/// dataset, the header row always carried over unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformTask {
    /// Keep rows whose cell contains the pattern (case-sensitive substring).
    Filter { column: String, pattern: String },

    /// Stable, numeric-aware sort of the data rows.
    Sort { column: String, order: SortOrder },

    /// Replace numeric cells > 0 with their natural log at 4 decimals.
    Log { column: String },

    /// Min-max scale numeric cells onto [low, high].
    Normalize { column: String, low: f64, high: f64 },

    /// Replace every cell in the column with a constant.
    SetConstant { column: String, value: String },

    /// Fill empty cells only; non-empty cells are never altered.
    FillMissing { column: String, fill: FillMethod },

    /// Drop rows whose cell in the column is the empty string.
    RemoveMissing { column: String },
}

impl TransformTask {
    /// Min-max normalization onto the default [0, 1] range.
    pub fn normalize_unit(column: impl Into<String>) -> Self {
        TransformTask::Normalize {
            column: column.into(),
            low: 0.0,
            high: 1.0,
        }
    }

    /// The column this task targets.
    pub fn column(&self) -> &str {
        match self {
            TransformTask::Filter { column, .. }
            | TransformTask::Sort { column, .. }
            | TransformTask::Log { column }
            | TransformTask::Normalize { column, .. }
            | TransformTask::SetConstant { column, .. }
            | TransformTask::FillMissing { column, .. }
            | TransformTask::RemoveMissing { column } => column,
        }
    }

    /// Get a human-readable description of the task.
    pub fn description(&self) -> String {
        match self {
            TransformTask::Filter { column, pattern } => {
                format!("Filter '{}' by \"{}\"", column, pattern)
            }
            TransformTask::Sort { column, order } => {
                let dir = match order {
                    SortOrder::Ascending => "ascending",
                    SortOrder::Descending => "descending",
                };
                format!("Sort by '{}' {}", column, dir)
            }
            TransformTask::Log { column } => format!("Log-transform '{}'", column),
            TransformTask::Normalize { column, low, high } => {
                format!("Normalize '{}' to [{}, {}]", column, low, high)
            }
            TransformTask::SetConstant { column, value } => {
                format!("Set '{}' to \"{}\"", column, value)
            }
            TransformTask::FillMissing { column, fill } => {
                let method = match fill {
                    FillMethod::Mean => "mean".to_string(),
                    FillMethod::Median => "median".to_string(),
                    FillMethod::Mode => "mode".to_string(),
                    FillMethod::Custom { value } => format!("'{}'", value),
                };
                format!("Fill missing in '{}' with {}", column, method)
            }
            TransformTask::RemoveMissing { column } => {
                format!("Remove rows with missing '{}'", column)
            }
        }
    }
}
