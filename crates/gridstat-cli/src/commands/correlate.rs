//! Correlate command - pairwise Pearson matrix.

use std::path::PathBuf;

use colored::Colorize;
use gridstat::Workbench;

pub fn run(
    file: PathBuf,
    columns: Vec<String>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let workbench = Workbench::new();
    let (dataset, _) = super::load(&workbench, &file, verbose)?;

    let matrix = workbench.correlate(&dataset, &columns)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    println!("{}", "Correlation matrix".cyan().bold());

    // Header row
    print!("{:>12}", "");
    for name in &matrix.columns {
        print!("{:>12}", truncate(name));
    }
    println!();

    for row in &matrix.columns {
        print!("{:>12}", truncate(row));
        for col in &matrix.columns {
            let value = matrix.coefficient(row, col).unwrap_or(0.0);
            let cell = format!("{:>12.4}", value);
            if row != col && value.abs() >= 0.7 {
                print!("{}", cell.green());
            } else {
                print!("{}", cell);
            }
        }
        println!();
    }

    Ok(())
}

fn truncate(name: &str) -> String {
    if name.chars().count() > 11 {
        let head: String = name.chars().take(10).collect();
        format!("{}…", head)
    } else {
        name.to_string()
    }
}
