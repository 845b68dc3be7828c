//! Export command - render the dataset as CSV or JSON.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use gridstat::{export, Workbench};

use crate::cli::OutputFormat;

pub fn run(
    file: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let workbench = Workbench::new();
    let (dataset, _) = super::load(&workbench, &file, verbose)?;

    let rendered = match format {
        OutputFormat::Csv => export::to_csv(&dataset),
        OutputFormat::Json => export::to_json(&dataset)?,
    };

    match output {
        Some(path) => {
            fs::write(&path, rendered)?;
            println!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
