//! Example: explore a tabular data file with Gridstat.
//!
//! Usage:
//!   cargo run --example explore -- <file_path> [column]

use std::env;
use std::path::Path;

use gridstat::{ModelSpec, TrainConfig, Workbench};

fn main() -> gridstat::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example explore -- <file_path> [column]");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Gridstat Exploration: {}", file_path);
    println!("{}", separator);
    println!();

    let workbench = Workbench::new();
    let (dataset, source) = workbench.load(path)?;

    println!("## Source");
    println!("  File: {}", source.file);
    println!("  Format: {}", source.format);
    println!("  Rows: {}", source.row_count);
    println!("  Columns: {}", source.column_count);
    println!();

    println!("## Quality");
    let report = workbench.assess(&dataset);
    println!("  Completeness: {:.2}%", report.completeness);
    println!("  Duplicate rows: {}", report.duplicate_rows);
    for issue in report.issues() {
        println!("  - {}", issue);
    }
    println!();

    let column = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| dataset.headers[0].clone());

    println!("## Statistics for '{}'", column);
    match workbench.describe(&dataset, &column) {
        Some(summary) => {
            println!("  Mean: {:.4}", summary.mean);
            println!("  Median: {:.4}", summary.median);
            println!("  Mode: {:.4}", summary.mode);
            println!("  Std dev: {:.4}", summary.std_dev);
        }
        None => println!("  (no numeric data)"),
    }
    println!();

    // When at least two numeric-looking columns exist, fit a quick linear
    // model of the second on the first.
    let numeric: Vec<String> = dataset
        .headers
        .iter()
        .filter(|h| {
            dataset
                .numeric_column_by_name(h)
                .map(|v| v.len() >= dataset.row_count() / 2 && !v.is_empty())
                .unwrap_or(false)
        })
        .cloned()
        .collect();

    if numeric.len() >= 2 {
        let config = TrainConfig::new(
            numeric[1].clone(),
            vec![numeric[0].clone()],
            ModelSpec::LinearRegression,
        );
        println!("## Regression: {} ~ {}", numeric[1], numeric[0]);
        match workbench.train(&dataset, &config) {
            Ok(result) => {
                println!("  RMSE: {:.4}", result.rmse);
                println!("  R-squared: {:.4}", result.r2);
            }
            Err(e) => println!("  Training skipped: {}", e),
        }
    }

    Ok(())
}
