//! Training lifecycle: Idle -> Training -> Trained, with re-train discarding
//! the prior fitted model.

use crate::error::{GridstatError, Result};
use crate::input::Dataset;
use crate::ml::{EvaluationHarness, EvaluationResult, TrainConfig, TrainingPhase};

/// Lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingState {
    /// No model trained yet.
    Idle,
    /// A training run is in flight.
    Training,
    /// Metrics and the fitted model are available.
    Trained,
}

/// Owns the harness and the current fitted model, enforcing the lifecycle:
/// prediction is only available once trained, and re-training replaces the
/// previous model and its predictions wholesale.
pub struct TrainingSession {
    harness: EvaluationHarness,
    state: TrainingState,
    result: Option<EvaluationResult>,
}

impl TrainingSession {
    pub fn new() -> Self {
        Self {
            harness: EvaluationHarness::new(),
            state: TrainingState::Idle,
            result: None,
        }
    }

    pub fn state(&self) -> TrainingState {
        self.state
    }

    /// Run a training request. Entering training discards any prior result;
    /// a failed run leaves the session idle.
    pub fn train(&mut self, dataset: &Dataset, config: &TrainConfig) -> Result<&EvaluationResult> {
        self.train_with_progress(dataset, config, |_| {})
    }

    /// As [`train`](Self::train), forwarding phases to the callback.
    pub fn train_with_progress<F>(
        &mut self,
        dataset: &Dataset,
        config: &TrainConfig,
        progress: F,
    ) -> Result<&EvaluationResult>
    where
        F: FnMut(TrainingPhase),
    {
        self.state = TrainingState::Training;
        self.result = None;

        match self.harness.train_with_progress(dataset, config, progress) {
            Ok(result) => {
                self.state = TrainingState::Trained;
                Ok(self.result.insert(result))
            }
            Err(e) => {
                self.state = TrainingState::Idle;
                Err(e)
            }
        }
    }

    /// The current evaluation result, if trained.
    pub fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }

    /// Predict through the retained model. Refused until a model is trained.
    pub fn predict(&self, inputs: &[f64]) -> Result<f64> {
        match &self.result {
            Some(result) => result.predict(inputs),
            None => Err(GridstatError::Validation(
                "Please train the model before making predictions".to_string(),
            )),
        }
    }
}

impl Default for TrainingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::ModelSpec;

    fn line_dataset() -> Dataset {
        Dataset::new(
            vec!["x".into(), "y".into()],
            (1..=10)
                .map(|i| vec![i.to_string(), (i * 2).to_string()])
                .collect(),
        )
    }

    #[test]
    fn test_predict_requires_training() {
        let session = TrainingSession::new();
        assert_eq!(session.state(), TrainingState::Idle);
        assert!(session.predict(&[1.0]).is_err());
    }

    #[test]
    fn test_train_then_predict() {
        let mut session = TrainingSession::new();
        let config = TrainConfig::new("y", vec!["x".into()], ModelSpec::LinearRegression);
        session.train(&line_dataset(), &config).unwrap();

        assert_eq!(session.state(), TrainingState::Trained);
        assert!((session.predict(&[7.0]).unwrap() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_retrain_replaces_model() {
        let mut session = TrainingSession::new();
        let linear = TrainConfig::new("y", vec!["x".into()], ModelSpec::LinearRegression);
        session.train(&line_dataset(), &linear).unwrap();
        let first_r2 = session.result().unwrap().r2;

        let tree = TrainConfig::new(
            "y",
            vec!["x".into()],
            ModelSpec::DecisionTree {
                max_depth: 2,
                min_leaf_samples: 2,
            },
        );
        session.train(&line_dataset(), &tree).unwrap();
        assert_eq!(session.state(), TrainingState::Trained);
        // The retained model is the new one; metrics were recomputed.
        assert!(session.result().unwrap().r2 <= first_r2);
    }

    #[test]
    fn test_failed_train_clears_prior_model() {
        let mut session = TrainingSession::new();
        let good = TrainConfig::new("y", vec!["x".into()], ModelSpec::LinearRegression);
        session.train(&line_dataset(), &good).unwrap();

        let bad = TrainConfig::new("nope", vec!["x".into()], ModelSpec::LinearRegression);
        assert!(session.train(&line_dataset(), &bad).is_err());
        assert_eq!(session.state(), TrainingState::Idle);
        assert!(session.predict(&[1.0]).is_err());
    }
}
