//! Model training and evaluation.

mod forest;
mod harness;
mod kmeans;
mod linear;
mod matrix;
mod model;
mod polynomial;
mod progress;
mod tree;

pub use forest::{ForestParams, RandomForest};
pub use harness::{EvaluationHarness, EvaluationResult, FeatureImportance, TrainConfig};
pub use kmeans::KMeansModel;
pub use linear::LinearModel;
pub use matrix::{build_features, build_target};
pub use model::{FittedModel, ModelSpec};
pub use polynomial::PolynomialModel;
pub use progress::TrainingPhase;
pub use tree::{RegressionTree, TreeParams};
