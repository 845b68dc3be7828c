//! Random forest regression: bagged regression trees.

use crate::error::{GridstatError, Result};

use super::tree::{RegressionTree, TreeParams};

/// Fixed RNG seed so repeated training runs produce identical forests.
const BOOTSTRAP_SEED: u64 = 0x6772_6964;

/// Forest hyperparameters.
#[derive(Debug, Clone, Copy)]
pub struct ForestParams {
    /// Number of trees.
    pub n_estimators: usize,
    /// Maximum depth per tree.
    pub max_depth: usize,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 10,
            max_depth: 5,
        }
    }
}

/// A fitted random forest.
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
    n_features: usize,
}

impl RandomForest {
    /// Fit `n_estimators` trees, each on a bootstrap sample of the rows.
    pub fn fit(x: &[Vec<f64>], y: &[f64], params: ForestParams) -> Result<Self> {
        if x.is_empty() || x.len() != y.len() {
            return Err(GridstatError::Validation(
                "Random forest requires non-empty, equal-length inputs".to_string(),
            ));
        }
        if params.n_estimators == 0 {
            return Err(GridstatError::Validation(
                "n_estimators must be at least 1".to_string(),
            ));
        }

        let n = x.len();
        let tree_params = TreeParams {
            max_depth: params.max_depth,
            min_leaf_samples: 2,
        };

        let mut rng = fastrand::Rng::with_seed(BOOTSTRAP_SEED);
        let mut trees = Vec::with_capacity(params.n_estimators);

        for _ in 0..params.n_estimators {
            let mut sample_x = Vec::with_capacity(n);
            let mut sample_y = Vec::with_capacity(n);
            for _ in 0..n {
                let pick = rng.usize(0..n);
                sample_x.push(x[pick].clone());
                sample_y.push(y[pick]);
            }
            trees.push(RegressionTree::fit(&sample_x, &sample_y, tree_params)?);
        }

        Ok(Self {
            trees,
            n_features: x[0].len(),
        })
    }

    /// Predict a single row: the mean of the per-tree predictions.
    pub fn predict(&self, row: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| t.predict(row)).sum();
        sum / self.trees.len() as f64
    }

    /// Native importance vector: per-feature squared-error reduction summed
    /// across trees, normalized to sum to 1 (all zeros when no split ever
    /// fired).
    pub fn feature_importance(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.n_features];
        for tree in &self.trees {
            for (feature, value) in tree.importances.iter().enumerate() {
                totals[feature] += value;
            }
        }

        let sum: f64 = totals.iter().sum();
        if sum > 0.0 {
            for value in &mut totals {
                *value /= sum;
            }
        }
        totals
    }

    /// Number of fitted trees.
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}
