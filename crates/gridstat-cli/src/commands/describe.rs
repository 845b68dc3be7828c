//! Describe command - summary statistics for one column.

use std::path::PathBuf;

use colored::Colorize;
use gridstat::Workbench;

pub fn run(
    file: PathBuf,
    column: String,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let workbench = Workbench::new();
    let (dataset, _) = super::load(&workbench, &file, verbose)?;

    let Some(summary) = workbench.describe(&dataset, &column) else {
        println!(
            "{} no numeric data in column '{}'",
            "No statistics:".yellow().bold(),
            column
        );
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Statistics for".cyan().bold(),
        column.white().bold()
    );
    println!("  Mean                {:.2}", summary.mean);
    println!("  Median              {:.2}", summary.median);
    println!("  Mode                {:.2}", summary.mode);
    println!("  Standard Deviation  {:.2}", summary.std_dev);

    if verbose {
        println!();
        println!("{}", "Distribution:".yellow().bold());
        for (value, count) in &summary.frequency {
            println!("  {:>12}  {}", value, "#".repeat(*count));
        }
    }

    Ok(())
}
