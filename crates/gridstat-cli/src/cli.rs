//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Gridstat: explore a CSV from the command line
#[derive(Parser)]
#[command(name = "gridstat")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summary statistics for one column
    Describe {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to analyze
        #[arg(short, long)]
        column: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assess dataset quality
    Quality {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pairwise Pearson correlation over selected columns
    Correlate {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Columns to correlate (repeat; at least two)
        #[arg(short, long = "column", value_name = "COLUMN")]
        columns: Vec<String>,

        /// Print the matrix as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a queue of transform tasks and write the result
    Transform {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Task in application order (repeatable). Forms:
        /// filter:COL=PATTERN | sort:COL:asc|desc | log:COL |
        /// normalize:COL[:LO,HI] | set:COL=VALUE |
        /// fill:COL:mean|median|mode|custom=VALUE | drop:COL
        #[arg(short, long = "task", value_name = "TASK")]
        tasks: Vec<String>,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short = 'F', long, default_value = "csv")]
        format: OutputFormat,
    },

    /// Train a model and report evaluation metrics
    Train {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Target column
        #[arg(short, long)]
        target: String,

        /// Feature columns (repeat)
        #[arg(short, long = "feature", value_name = "COLUMN")]
        features: Vec<String>,

        /// Model strategy
        #[arg(short, long, default_value = "linear-regression")]
        model: ModelChoice,

        /// Polynomial degree
        #[arg(long, default_value = "2")]
        degree: usize,

        /// Maximum tree depth
        #[arg(long, default_value = "5")]
        max_depth: usize,

        /// Minimum samples for a node to split
        #[arg(long, default_value = "2")]
        min_leaf_samples: usize,

        /// Number of forest trees
        #[arg(long, default_value = "10")]
        n_estimators: usize,

        /// Number of clusters
        #[arg(long, default_value = "3")]
        n_clusters: usize,

        /// Held-out test fraction, in [0.1, 0.5]
        #[arg(long, default_value = "0.2")]
        test_size: f64,

        /// Predict after training: comma-separated value per feature
        #[arg(short, long)]
        predict: Option<String>,
    },

    /// Export the dataset as CSV or JSON
    Export {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short = 'F', long, default_value = "csv")]
        format: OutputFormat,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelChoice {
    LinearRegression,
    PolynomialRegression,
    DecisionTree,
    RandomForest,
    Kmeans,
}
