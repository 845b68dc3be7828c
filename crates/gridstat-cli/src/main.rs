//! Gridstat CLI - explore tabular data from the terminal.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Describe { file, column, json } => {
            commands::describe::run(file, column, json, cli.verbose)
        }

        Commands::Quality { file, json } => commands::quality::run(file, json, cli.verbose),

        Commands::Correlate {
            file,
            columns,
            json,
        } => commands::correlate::run(file, columns, json, cli.verbose),

        Commands::Transform {
            file,
            tasks,
            output,
            format,
        } => commands::transform::run(file, tasks, output, format, cli.verbose),

        Commands::Train {
            file,
            target,
            features,
            model,
            degree,
            max_depth,
            min_leaf_samples,
            n_estimators,
            n_clusters,
            test_size,
            predict,
        } => commands::train::run(
            file,
            target,
            features,
            model,
            commands::train::Hyperparameters {
                degree,
                max_depth,
                min_leaf_samples,
                n_estimators,
                n_clusters,
                test_size,
            },
            predict,
            cli.verbose,
        ),

        Commands::Export {
            file,
            format,
            output,
        } => commands::export::run(file, format, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
