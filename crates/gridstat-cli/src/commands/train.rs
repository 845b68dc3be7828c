//! Train command - fit a model, report metrics, optionally predict.

use std::path::PathBuf;

use colored::Colorize;
use gridstat::{ModelSpec, TrainConfig, Workbench};

use crate::cli::ModelChoice;

/// Strategy-specific knobs gathered from the command line.
pub struct Hyperparameters {
    pub degree: usize,
    pub max_depth: usize,
    pub min_leaf_samples: usize,
    pub n_estimators: usize,
    pub n_clusters: usize,
    pub test_size: f64,
}

pub fn run(
    file: PathBuf,
    target: String,
    features: Vec<String>,
    model: ModelChoice,
    params: Hyperparameters,
    predict: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let workbench = Workbench::new();
    let (dataset, _) = super::load(&workbench, &file, verbose)?;

    let spec = match model {
        ModelChoice::LinearRegression => ModelSpec::LinearRegression,
        ModelChoice::PolynomialRegression => ModelSpec::PolynomialRegression {
            degree: params.degree,
        },
        ModelChoice::DecisionTree => ModelSpec::DecisionTree {
            max_depth: params.max_depth,
            min_leaf_samples: params.min_leaf_samples,
        },
        ModelChoice::RandomForest => ModelSpec::RandomForest {
            n_estimators: params.n_estimators,
            max_depth: params.max_depth,
        },
        ModelChoice::Kmeans => ModelSpec::KMeans {
            n_clusters: params.n_clusters,
        },
    };

    println!(
        "{} {} (target '{}', {} features)",
        "Training".cyan().bold(),
        spec.tag().white().bold(),
        target,
        features.len()
    );

    let config = TrainConfig::new(target, features, spec).with_test_size(params.test_size);

    let mut session = workbench.session();
    let result = if verbose {
        session.train_with_progress(&dataset, &config, |phase| {
            println!("  {}", phase.message().dimmed());
        })?
    } else {
        session.train(&dataset, &config)?
    };

    println!();
    println!("{}", "Evaluation".yellow().bold());
    println!("  RMSE       {:.4}", result.rmse);
    println!("  R-squared  {:.4}", result.r2);
    println!("  CV mean    {:.4}", result.fold_mean);
    println!("  CV stddev  {:.4}", result.fold_std);

    if !result.feature_importance.is_empty() {
        println!();
        println!("{}", "Feature importance".yellow().bold());
        for item in &result.feature_importance {
            println!("  {:20} {:.4}", item.feature, item.importance);
        }
    }

    if let Some(raw) = predict {
        let inputs: Vec<f64> = raw
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid prediction input '{}'", v))
            })
            .collect::<Result<_, _>>()?;

        let predicted = session.predict(&inputs)?;
        println!();
        println!(
            "{} {}",
            "Prediction:".green().bold(),
            format!("{:.4}", predicted).white().bold()
        );
    }

    Ok(())
}
