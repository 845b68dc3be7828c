//! Quality command - assess a data file.

use std::path::PathBuf;

use colored::Colorize;
use gridstat::Workbench;

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workbench = Workbench::new();
    let (dataset, _) = super::load(&workbench, &file, verbose)?;

    let report = workbench.assess(&dataset);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {:.2}% of cells contain data",
        "Completeness:".cyan().bold(),
        report.completeness
    );

    if report.is_clean() {
        println!("{}", "No issues found - data looks clean!".green());
        return Ok(());
    }

    println!();
    println!(
        "{} ({})",
        "Quality issues".yellow().bold(),
        report.findings.len()
    );
    for issue in report.issues() {
        println!("  - {}", issue);
    }

    println!();
    println!("{}", "Suggestions".cyan().bold());
    for suggestion in report.suggestions() {
        println!("  - {}", suggestion);
    }

    Ok(())
}
