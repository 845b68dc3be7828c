//! Engine that applies transform tasks to datasets.

use std::cmp::Ordering;

use crate::input::Dataset;
use crate::stats::{lower_median, mean, mode};

use super::task::{FillMethod, SortOrder, TransformTask};

/// Applies [`TransformTask`]s. Every operation is a pure function from a
/// dataset (plus parameters) to a new dataset; an unresolvable column makes
/// the task a no-op that returns the input unchanged.
pub struct TransformEngine;

impl TransformEngine {
    pub fn new() -> Self {
        Self
    }

    /// Apply a queue of tasks in order; each task consumes the output of the
    /// previous one.
    pub fn apply_all(&self, dataset: &Dataset, tasks: &[TransformTask]) -> Dataset {
        tasks
            .iter()
            .fold(dataset.clone(), |acc, task| self.apply(&acc, task))
    }

    /// Apply a single task.
    pub fn apply(&self, dataset: &Dataset, task: &TransformTask) -> Dataset {
        let Some(index) = dataset.column_index(task.column()) else {
            return dataset.clone();
        };

        match task {
            TransformTask::Filter { pattern, .. } => self.filter(dataset, index, pattern),
            TransformTask::Sort { order, .. } => self.sort(dataset, index, *order),
            TransformTask::Log { .. } => self.log_transform(dataset, index),
            TransformTask::Normalize { low, high, .. } => {
                self.normalize(dataset, index, *low, *high)
            }
            TransformTask::SetConstant { value, .. } => {
                self.map_column(dataset, index, |_| value.clone())
            }
            TransformTask::FillMissing { fill, .. } => self.fill_missing(dataset, index, fill),
            TransformTask::RemoveMissing { .. } => self.remove_missing(dataset, index),
        }
    }

    fn filter(&self, dataset: &Dataset, index: usize, pattern: &str) -> Dataset {
        let rows = dataset
            .rows
            .iter()
            .filter(|row| row.get(index).map(|c| c.contains(pattern)).unwrap_or(false))
            .cloned()
            .collect();
        Dataset::new(dataset.headers.clone(), rows)
    }

    fn sort(&self, dataset: &Dataset, index: usize, order: SortOrder) -> Dataset {
        let mut rows = dataset.rows.clone();
        // Vec::sort_by is stable, so equal keys keep their relative order.
        rows.sort_by(|a, b| {
            let left = a.get(index).map(|s| s.as_str()).unwrap_or("");
            let right = b.get(index).map(|s| s.as_str()).unwrap_or("");
            match order {
                SortOrder::Ascending => natural_cmp(left, right),
                SortOrder::Descending => natural_cmp(right, left),
            }
        });
        Dataset::new(dataset.headers.clone(), rows)
    }

    fn log_transform(&self, dataset: &Dataset, index: usize) -> Dataset {
        self.map_column(dataset, index, |cell| {
            match cell.trim().parse::<f64>() {
                Ok(v) if v > 0.0 && v.is_finite() => format!("{:.4}", v.ln()),
                _ => cell.to_string(),
            }
        })
    }

    fn normalize(&self, dataset: &Dataset, index: usize, low: f64, high: f64) -> Dataset {
        let values = dataset.numeric_column(index);
        if values.is_empty() {
            return dataset.clone();
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        self.map_column(dataset, index, |cell| {
            match cell.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => {
                    // A constant column maps to the lower bound rather than
                    // dividing by zero.
                    let scaled = if max == min {
                        low
                    } else {
                        (v - min) / (max - min) * (high - low) + low
                    };
                    format!("{:.4}", scaled)
                }
                _ => cell.to_string(),
            }
        })
    }

    fn fill_missing(&self, dataset: &Dataset, index: usize, fill: &FillMethod) -> Dataset {
        let replacement = match fill {
            FillMethod::Custom { value } => value.clone(),
            statistical => {
                let values = dataset.numeric_column(index);
                if values.is_empty() {
                    // No numeric view to derive a fill value from.
                    return dataset.clone();
                }
                let v = match statistical {
                    FillMethod::Mean => mean(&values),
                    FillMethod::Median => lower_median(&values),
                    FillMethod::Mode => mode(&values),
                    FillMethod::Custom { .. } => unreachable!(),
                };
                format!("{}", v)
            }
        };

        let rows = dataset
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                let is_empty = row.get(index).map(|c| c.is_empty()).unwrap_or(true);
                if is_empty {
                    while row.len() <= index {
                        row.push(String::new());
                    }
                    row[index] = replacement.clone();
                }
                row
            })
            .collect();
        Dataset::new(dataset.headers.clone(), rows)
    }

    fn remove_missing(&self, dataset: &Dataset, index: usize) -> Dataset {
        let rows = dataset
            .rows
            .iter()
            .filter(|row| row.get(index).map(|c| !c.is_empty()).unwrap_or(false))
            .cloned()
            .collect();
        Dataset::new(dataset.headers.clone(), rows)
    }

    fn map_column<F>(&self, dataset: &Dataset, index: usize, f: F) -> Dataset
    where
        F: Fn(&str) -> String,
    {
        let rows = dataset
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                if let Some(cell) = row.get_mut(index) {
                    *cell = f(cell);
                }
                row
            })
            .collect();
        Dataset::new(dataset.headers.clone(), rows)
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric-aware string ordering: runs of ASCII digits compare by numeric
/// value, everything else by code point. "row2" < "row10".
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let run_a = digit_run(&a, &mut i);
            let run_b = digit_run(&b, &mut j);
            match compare_digit_runs(&run_a, &run_b) {
                Ordering::Equal => {}
                other => return other,
            }
        } else {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                other => return other,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while *pos < chars.len() && chars[*pos].is_ascii_digit() {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

/// Compare two digit runs as integers of arbitrary length.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
