//! Dataset value type and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Parsed tabular data: a header row plus data rows of string cells.
///
/// A `Dataset` is a value. Engines that reshape data return a new `Dataset`
/// instead of mutating their input, so callers can keep prior versions for
/// undo/history. Data rows SHOULD have the same length as the header, but
/// ragged rows are tolerated: reading past the end of a short row yields the
/// empty string, and surplus cells in a long row are never addressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order, header excluded).
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create a new dataset.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of data rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolve a column name to its position in the header row.
    ///
    /// A miss is a recoverable condition: callers degrade to an empty or
    /// neutral result rather than failing.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get all values for a column by index. Short rows yield "".
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// The numeric view of a column: every cell that parses as a float,
    /// in row order. Cells that fail to parse are excluded, never coerced.
    pub fn numeric_column(&self, index: usize) -> Vec<f64> {
        self.column_values(index)
            .filter_map(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .collect()
    }

    /// Numeric view resolved by column name; `None` when the name is not in
    /// the header.
    pub fn numeric_column_by_name(&self, name: &str) -> Option<Vec<f64>> {
        self.column_index(name).map(|i| self.numeric_column(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(
            vec!["a".into(), "b".into()],
            vec![
                vec!["1".into(), "x".into()],
                vec!["2.5".into()],
                vec!["oops".into(), "y".into(), "extra".into()],
            ],
        )
    }

    #[test]
    fn test_column_index() {
        let d = dataset();
        assert_eq!(d.column_index("b"), Some(1));
        assert_eq!(d.column_index("missing"), None);
    }

    #[test]
    fn test_ragged_rows() {
        let d = dataset();
        // Short row reads as empty, long row's extras are unreachable by header.
        let b: Vec<&str> = d.column_values(1).collect();
        assert_eq!(b, vec!["x", "", "y"]);
    }

    #[test]
    fn test_numeric_view_excludes_unparseable() {
        let d = dataset();
        assert_eq!(d.numeric_column(0), vec![1.0, 2.5]);
    }
}
