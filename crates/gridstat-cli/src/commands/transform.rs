//! Transform command - apply a task queue and write the result.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use gridstat::{export, FillMethod, SortOrder, TransformTask, Workbench};

use crate::cli::OutputFormat;

pub fn run(
    file: PathBuf,
    task_specs: Vec<String>,
    output: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if task_specs.is_empty() {
        return Err("No tasks given; pass at least one --task".into());
    }

    let tasks: Vec<TransformTask> = task_specs
        .iter()
        .map(|spec| parse_task(spec))
        .collect::<Result<_, _>>()?;

    let workbench = Workbench::new();
    let (dataset, _) = super::load(&workbench, &file, verbose)?;

    let before = dataset.row_count();
    let transformed = workbench.apply(&dataset, &tasks);

    if verbose {
        for task in &tasks {
            println!("{} {}", "Applied".cyan().bold(), task.description());
        }
        println!(
            "{} {} -> {} rows",
            "Rows:".yellow().bold(),
            before,
            transformed.row_count()
        );
    }

    let rendered = match format {
        OutputFormat::Csv => export::to_csv(&transformed),
        OutputFormat::Json => export::to_json(&transformed)?,
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

/// Parse one task spec of the documented `kind:...` forms.
fn parse_task(spec: &str) -> Result<TransformTask, String> {
    let (kind, rest) = spec
        .split_once(':')
        .ok_or_else(|| format!("Malformed task '{}'", spec))?;

    match kind {
        "filter" => {
            let (column, pattern) = rest
                .split_once('=')
                .ok_or_else(|| format!("filter task needs COL=PATTERN, got '{}'", rest))?;
            Ok(TransformTask::Filter {
                column: column.to_string(),
                pattern: pattern.to_string(),
            })
        }
        "sort" => {
            let (column, order) = match rest.rsplit_once(':') {
                Some((column, "desc")) => (column, SortOrder::Descending),
                Some((column, "asc")) => (column, SortOrder::Ascending),
                _ => (rest, SortOrder::Ascending),
            };
            Ok(TransformTask::Sort {
                column: column.to_string(),
                order,
            })
        }
        "log" => Ok(TransformTask::Log {
            column: rest.to_string(),
        }),
        "normalize" => match rest.split_once(':') {
            Some((column, range)) => {
                let (lo, hi) = range
                    .split_once(',')
                    .ok_or_else(|| format!("normalize range needs LO,HI, got '{}'", range))?;
                Ok(TransformTask::Normalize {
                    column: column.to_string(),
                    low: lo.trim().parse().map_err(|_| format!("Bad bound '{}'", lo))?,
                    high: hi.trim().parse().map_err(|_| format!("Bad bound '{}'", hi))?,
                })
            }
            None => Ok(TransformTask::normalize_unit(rest)),
        },
        "fill" => {
            let (column, method) = rest
                .split_once(':')
                .ok_or_else(|| format!("fill task needs COL:METHOD, got '{}'", rest))?;
            let fill = match method {
                "mean" => FillMethod::Mean,
                "median" => FillMethod::Median,
                "mode" => FillMethod::Mode,
                custom => match custom.split_once('=') {
                    Some(("custom", value)) => FillMethod::Custom {
                        value: value.to_string(),
                    },
                    _ => return Err(format!("Unknown fill method '{}'", method)),
                },
            };
            Ok(TransformTask::FillMissing {
                column: column.to_string(),
                fill,
            })
        }
        "set" => {
            let (column, value) = rest
                .split_once('=')
                .ok_or_else(|| format!("set task needs COL=VALUE, got '{}'", rest))?;
            Ok(TransformTask::SetConstant {
                column: column.to_string(),
                value: value.to_string(),
            })
        }
        "drop" => Ok(TransformTask::RemoveMissing {
            column: rest.to_string(),
        }),
        other => Err(format!("Unknown task kind '{}'", other)),
    }
}
