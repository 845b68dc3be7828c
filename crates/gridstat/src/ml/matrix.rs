//! Numeric matrix construction for model training.
//!
//! Unlike the statistics and quality engines, which exclude unparseable
//! cells, matrix building coerces them to 0.0. The asymmetry is original
//! behavior and changing it would change model outputs.

use crate::error::{GridstatError, Result};
use crate::input::Dataset;

/// Parse a cell for the feature matrix: unparseable becomes 0.0.
fn coerce(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(0.0)
}

/// Resolve feature columns and build the row-major feature matrix X.
/// Unresolvable columns are validation errors here, not neutral results.
pub fn build_features(dataset: &Dataset, features: &[String]) -> Result<Vec<Vec<f64>>> {
    let indices = resolve_columns(dataset, features)?;

    Ok(dataset
        .rows
        .iter()
        .map(|row| {
            indices
                .iter()
                .map(|&i| coerce(row.get(i).map(|s| s.as_str()).unwrap_or("")))
                .collect()
        })
        .collect())
}

/// Resolve the target column and build the target vector y.
pub fn build_target(dataset: &Dataset, target: &str) -> Result<Vec<f64>> {
    let index = dataset.column_index(target).ok_or_else(|| {
        GridstatError::Validation(format!("Target column '{}' not found", target))
    })?;

    Ok(dataset.column_values(index).map(coerce).collect())
}

fn resolve_columns(dataset: &Dataset, columns: &[String]) -> Result<Vec<usize>> {
    columns
        .iter()
        .map(|name| {
            dataset.column_index(name).ok_or_else(|| {
                GridstatError::Validation(format!("Feature column '{}' not found", name))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(
            vec!["x".into(), "y".into()],
            vec![
                vec!["1".into(), "2".into()],
                vec!["bad".into(), "4".into()],
                vec!["3".into(), "".into()],
            ],
        )
    }

    #[test]
    fn test_unparseable_cells_coerce_to_zero() {
        let x = build_features(&dataset(), &["x".into()]).unwrap();
        assert_eq!(x, vec![vec![1.0], vec![0.0], vec![3.0]]);

        let y = build_target(&dataset(), "y").unwrap();
        assert_eq!(y, vec![2.0, 4.0, 0.0]);
    }

    #[test]
    fn test_unknown_column_is_an_error() {
        assert!(build_features(&dataset(), &["nope".into()]).is_err());
        assert!(build_target(&dataset(), "nope").is_err());
    }
}
