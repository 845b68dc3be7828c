//! Command implementations.

pub mod correlate;
pub mod describe;
pub mod export;
pub mod quality;
pub mod train;
pub mod transform;

use std::path::Path;

use gridstat::{Dataset, SourceMetadata, Workbench};

/// Shared load step: check the path, parse, optionally narrate.
pub fn load(
    workbench: &Workbench,
    file: &Path,
    verbose: bool,
) -> Result<(Dataset, SourceMetadata), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let (dataset, source) = workbench.load(file)?;

    if verbose {
        println!(
            "Loaded {} ({}, {} rows x {} columns)",
            source.file, source.format, source.row_count, source.column_count
        );
    }

    Ok((dataset, source))
}
