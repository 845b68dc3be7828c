//! Evaluation harness: split, metrics, cross-validation, importance.

use serde::{Deserialize, Serialize};

use crate::error::{GridstatError, Result};
use crate::input::Dataset;

use super::matrix::{build_features, build_target};
use super::model::{FittedModel, ModelSpec};
use super::progress::TrainingPhase;

/// Number of cross-validation folds.
const K_FOLDS: usize = 5;

/// Accepted range for the held-out test fraction.
const TEST_SIZE_RANGE: (f64, f64) = (0.1, 0.5);

/// A training request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Target column name.
    pub target: String,
    /// Feature column names, in prediction-input order.
    pub features: Vec<String>,
    /// Strategy and hyperparameters.
    pub model: ModelSpec,
    /// Fraction of rows held out for testing, in [0.1, 0.5].
    pub test_size: f64,
}

impl TrainConfig {
    pub fn new(target: impl Into<String>, features: Vec<String>, model: ModelSpec) -> Self {
        Self {
            target: target.into(),
            features,
            model,
            test_size: 0.2,
        }
    }

    pub fn with_test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }
}

/// Importance of one feature column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Result of one training invocation. Replaced wholesale on re-train; holds
/// the fitted model for later single-point prediction.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// Root mean squared error on the held-out split.
    pub rmse: f64,
    /// Coefficient of determination on the held-out split.
    pub r2: f64,
    /// Mean of the k-fold MSEs.
    pub fold_mean: f64,
    /// Population standard deviation of the k-fold MSEs.
    pub fold_std: f64,
    /// Per-feature importance, when the strategy defines one.
    pub feature_importance: Vec<FeatureImportance>,
    /// Feature names in training order.
    features: Vec<String>,
    /// The retained fitted model.
    model: FittedModel,
}

impl EvaluationResult {
    /// Predict a single point. Takes one value per feature column, in the
    /// order used at training time.
    pub fn predict(&self, inputs: &[f64]) -> Result<f64> {
        if inputs.len() != self.features.len() {
            return Err(GridstatError::Validation(format!(
                "Expected {} prediction inputs, got {}",
                self.features.len(),
                inputs.len()
            )));
        }
        if inputs.iter().any(|v| !v.is_finite()) {
            return Err(GridstatError::Validation(
                "Prediction inputs must be finite numbers".to_string(),
            ));
        }
        Ok(self.model.predict(inputs))
    }

    /// Feature names in training order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Borrow the fitted model.
    pub fn model(&self) -> &FittedModel {
        &self.model
    }
}

/// Runs training and evaluation. Stateless; every call builds a fresh result.
pub struct EvaluationHarness;

impl EvaluationHarness {
    pub fn new() -> Self {
        Self
    }

    /// Train and evaluate without progress reporting.
    pub fn train(&self, dataset: &Dataset, config: &TrainConfig) -> Result<EvaluationResult> {
        self.train_with_progress(dataset, config, |_| {})
    }

    /// Train and evaluate, emitting each [`TrainingPhase`] to the callback.
    pub fn train_with_progress<F>(
        &self,
        dataset: &Dataset,
        config: &TrainConfig,
        mut progress: F,
    ) -> Result<EvaluationResult>
    where
        F: FnMut(TrainingPhase),
    {
        self.validate(config)?;
        progress(TrainingPhase::Start);

        progress(TrainingPhase::Preprocess);
        let x = build_features(dataset, &config.features)?;
        let y = build_target(dataset, &config.target)?;
        if x.is_empty() {
            return Err(GridstatError::EmptyData(
                "No data rows to train on".to_string(),
            ));
        }

        progress(TrainingPhase::Fit);
        let (train_x, train_y, test_x, test_y) = head_tail_split(&x, &y, config.test_size);
        let model = config.model.fit(&train_x, &train_y)?;

        progress(TrainingPhase::Evaluate);
        let mse = mean_squared_error(&model, &test_x, &test_y);
        let rmse = mse.sqrt();
        let r2 = r_squared(mse, &test_y);
        let (fold_mean, fold_std) = self.cross_validate(&x, &y, &config.model)?;
        let feature_importance = importance_by_name(&model, &config.features);

        progress(TrainingPhase::Done);
        Ok(EvaluationResult {
            rmse,
            r2,
            fold_mean,
            fold_std,
            feature_importance,
            features: config.features.clone(),
            model,
        })
    }

    fn validate(&self, config: &TrainConfig) -> Result<()> {
        if config.target.is_empty() {
            return Err(GridstatError::Validation(
                "Please select a target column".to_string(),
            ));
        }
        if config.features.is_empty() {
            return Err(GridstatError::Validation(
                "Please select at least one feature column".to_string(),
            ));
        }
        let (lo, hi) = TEST_SIZE_RANGE;
        if !(config.test_size >= lo && config.test_size <= hi) {
            return Err(GridstatError::Validation(format!(
                "test_size must be in [{}, {}], got {}",
                lo, hi, config.test_size
            )));
        }
        Ok(())
    }

    /// Contiguous, non-shuffled k-fold cross-validation: folds of floor(n/k)
    /// rows; each fold held out once while the model trains on every other
    /// row. Returns (mean, population stddev) of the fold MSEs, or (0, 0)
    /// when there are fewer rows than folds.
    fn cross_validate(
        &self,
        x: &[Vec<f64>],
        y: &[f64],
        spec: &ModelSpec,
    ) -> Result<(f64, f64)> {
        let n = x.len();
        let fold_size = n / K_FOLDS;
        if fold_size == 0 {
            return Ok((0.0, 0.0));
        }

        let mut fold_mses = Vec::with_capacity(K_FOLDS);

        for fold in 0..K_FOLDS {
            let start = fold * fold_size;
            let end = start + fold_size;

            let mut train_x = Vec::with_capacity(n - fold_size);
            let mut train_y = Vec::with_capacity(n - fold_size);
            let mut test_x = Vec::with_capacity(fold_size);
            let mut test_y = Vec::with_capacity(fold_size);

            for i in 0..n {
                if i >= start && i < end {
                    test_x.push(x[i].clone());
                    test_y.push(y[i]);
                } else {
                    train_x.push(x[i].clone());
                    train_y.push(y[i]);
                }
            }

            let model = spec.fit(&train_x, &train_y)?;
            fold_mses.push(mean_squared_error(&model, &test_x, &test_y));
        }

        let mean = fold_mses.iter().sum::<f64>() / fold_mses.len() as f64;
        let variance = fold_mses.iter().map(|m| (m - mean).powi(2)).sum::<f64>()
            / fold_mses.len() as f64;

        Ok((mean, variance.sqrt()))
    }
}

impl Default for EvaluationHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Index-based split: the first ceil(n * (1 - test_size)) rows train, the
/// remainder test. No shuffling, so repeated calls split identically.
fn head_tail_split(
    x: &[Vec<f64>],
    y: &[f64],
    test_size: f64,
) -> (Vec<Vec<f64>>, Vec<f64>, Vec<Vec<f64>>, Vec<f64>) {
    let n = x.len();
    let train_len = ((n as f64) * (1.0 - test_size)).ceil() as usize;
    let train_len = train_len.min(n);

    (
        x[..train_len].to_vec(),
        y[..train_len].to_vec(),
        x[train_len..].to_vec(),
        y[train_len..].to_vec(),
    )
}

/// MSE of the model over the given rows; 0 for an empty split (neutral, so
/// tiny datasets never surface NaN).
fn mean_squared_error(model: &FittedModel, x: &[Vec<f64>], y: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(row, &target)| {
            let residual = model.predict(row) - target;
            residual * residual
        })
        .sum();
    sum / x.len() as f64
}

/// R^2 = 1 - MSE / Var(y_test), population variance; defined as 0 when the
/// test target has no variance or no rows.
fn r_squared(mse: f64, y_test: &[f64]) -> f64 {
    if y_test.is_empty() {
        return 0.0;
    }
    let mean = y_test.iter().sum::<f64>() / y_test.len() as f64;
    let variance = y_test.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / y_test.len() as f64;
    if variance == 0.0 {
        return 0.0;
    }
    1.0 - mse / variance
}

/// Pair raw importance values with their feature names.
fn importance_by_name(model: &FittedModel, features: &[String]) -> Vec<FeatureImportance> {
    match model.feature_importance() {
        Some(values) => features
            .iter()
            .zip(values)
            .map(|(feature, importance)| FeatureImportance {
                feature: feature.clone(),
                importance,
            })
            .collect(),
        None => Vec::new(),
    }
}
