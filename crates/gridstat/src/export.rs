//! Dataset export: CSV and JSON renderings.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::input::Dataset;

/// Export formats understood by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Render the dataset as unquoted CSV: cells joined with commas, rows with
/// newlines, header first.
pub fn to_csv(dataset: &Dataset) -> String {
    let mut lines = Vec::with_capacity(dataset.row_count() + 1);
    lines.push(dataset.headers.join(","));
    for row in &dataset.rows {
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Render the dataset as a pretty-printed JSON array of objects keyed by
/// header name, one object per data row. Cells beyond a short row are omitted
/// from that row's object.
pub fn to_json(dataset: &Dataset) -> Result<String> {
    let objects: Vec<Value> = dataset
        .rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            for (index, header) in dataset.headers.iter().enumerate() {
                if let Some(cell) = row.get(index) {
                    object.insert(header.clone(), Value::String(cell.clone()));
                }
            }
            Value::Object(object)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&Value::Array(objects))?)
}

/// Render in the requested format.
pub fn render(dataset: &Dataset, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(to_csv(dataset)),
        ExportFormat::Json => to_json(dataset),
    }
}
