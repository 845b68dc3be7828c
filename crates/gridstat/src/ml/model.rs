//! Model strategies: a closed set of tagged variants sharing the
//! {fit, predict, optional importance} capability set.

use serde::{Deserialize, Serialize};

use crate::error::{GridstatError, Result};

use super::forest::{ForestParams, RandomForest};
use super::kmeans::KMeansModel;
use super::linear::LinearModel;
use super::polynomial::PolynomialModel;
use super::tree::{RegressionTree, TreeParams};

/// A model strategy plus its hyperparameters, selected before training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Simple linear regression on a single feature.
    LinearRegression,
    /// Polynomial regression of the given degree on a single feature.
    PolynomialRegression { degree: usize },
    /// Decision tree regression.
    DecisionTree {
        max_depth: usize,
        min_leaf_samples: usize,
    },
    /// Random forest regression.
    RandomForest {
        n_estimators: usize,
        max_depth: usize,
    },
    /// K-means clustering; predictions are cluster indices.
    KMeans { n_clusters: usize },
}

impl ModelSpec {
    /// Strategy tag as exposed to configuration surfaces.
    pub fn tag(&self) -> &'static str {
        match self {
            ModelSpec::LinearRegression => "linear_regression",
            ModelSpec::PolynomialRegression { .. } => "polynomial_regression",
            ModelSpec::DecisionTree { .. } => "decision_tree",
            ModelSpec::RandomForest { .. } => "random_forest",
            ModelSpec::KMeans { .. } => "kmeans",
        }
    }

    /// True for the single-feature regressions.
    pub fn is_single_feature(&self) -> bool {
        matches!(
            self,
            ModelSpec::LinearRegression | ModelSpec::PolynomialRegression { .. }
        )
    }

    /// Fit this strategy on the given matrix and target.
    pub fn fit(&self, x: &[Vec<f64>], y: &[f64]) -> Result<FittedModel> {
        match self {
            ModelSpec::LinearRegression => {
                let feature = single_feature(x)?;
                Ok(FittedModel::Linear(LinearModel::fit(&feature, y)?))
            }
            ModelSpec::PolynomialRegression { degree } => {
                let feature = single_feature(x)?;
                Ok(FittedModel::Polynomial(PolynomialModel::fit(
                    &feature, y, *degree,
                )?))
            }
            ModelSpec::DecisionTree {
                max_depth,
                min_leaf_samples,
            } => {
                let params = TreeParams {
                    max_depth: *max_depth,
                    min_leaf_samples: *min_leaf_samples,
                };
                Ok(FittedModel::Tree(RegressionTree::fit(x, y, params)?))
            }
            ModelSpec::RandomForest {
                n_estimators,
                max_depth,
            } => {
                let params = ForestParams {
                    n_estimators: *n_estimators,
                    max_depth: *max_depth,
                };
                Ok(FittedModel::Forest(RandomForest::fit(x, y, params)?))
            }
            ModelSpec::KMeans { n_clusters } => {
                // Clustering ignores the target vector.
                Ok(FittedModel::KMeans(KMeansModel::fit(x, *n_clusters)?))
            }
        }
    }
}

/// Extract the single feature column for linear/polynomial strategies.
fn single_feature(x: &[Vec<f64>]) -> Result<Vec<f64>> {
    if x.first().map(|row| row.len()).unwrap_or(0) != 1 {
        return Err(GridstatError::Validation(
            "This strategy takes exactly one feature column".to_string(),
        ));
    }
    Ok(x.iter().map(|row| row[0]).collect())
}

/// A fitted model retained for later single-point prediction.
#[derive(Debug, Clone)]
pub enum FittedModel {
    Linear(LinearModel),
    Polynomial(PolynomialModel),
    Tree(RegressionTree),
    Forest(RandomForest),
    KMeans(KMeansModel),
}

impl FittedModel {
    /// Predict one row, one value per feature column in training order.
    pub fn predict(&self, row: &[f64]) -> f64 {
        match self {
            FittedModel::Linear(m) => m.predict(row[0]),
            FittedModel::Polynomial(m) => m.predict(row[0]),
            FittedModel::Tree(m) => m.predict(row),
            FittedModel::Forest(m) => m.predict(row),
            FittedModel::KMeans(m) => m.predict(row),
        }
    }

    /// Raw per-feature importance, where the strategy defines one:
    /// the absolute slope for linear regression and the accumulated
    /// split-gain vector for the forest. Other strategies report none.
    pub fn feature_importance(&self) -> Option<Vec<f64>> {
        match self {
            FittedModel::Linear(m) => Some(vec![m.slope.abs()]),
            FittedModel::Forest(m) => Some(m.feature_importance()),
            _ => None,
        }
    }
}
