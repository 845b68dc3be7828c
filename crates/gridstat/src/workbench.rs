//! Main Workbench struct and public API.

use std::path::Path;

use crate::error::{GridstatError, Result};
use crate::input::{Dataset, Parser, ParserConfig, SourceMetadata};
use crate::ml::{EvaluationHarness, EvaluationResult, TrainConfig};
use crate::quality::{QualityAssessor, QualityReport};
use crate::stats::{ColumnSummary, CorrelationEngine, CorrelationMatrix, StatisticsEngine};
use crate::transform::{TransformEngine, TransformTask};
use crate::workflow::TrainingSession;

/// Configuration for a workbench.
#[derive(Debug, Clone, Default)]
pub struct WorkbenchConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
}

/// The main analysis entry point, wiring the parser and engines together for
/// a presentation layer. Every operation is synchronous and leaves its inputs
/// untouched; failures are local to the requested operation.
pub struct Workbench {
    parser: Parser,
    statistics: StatisticsEngine,
    quality: QualityAssessor,
    correlation: CorrelationEngine,
    transform: TransformEngine,
    harness: EvaluationHarness,
}

impl Workbench {
    /// Create a workbench with default configuration.
    pub fn new() -> Self {
        Self::with_config(WorkbenchConfig::default())
    }

    /// Create a workbench with custom configuration.
    pub fn with_config(config: WorkbenchConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            statistics: StatisticsEngine::new(),
            quality: QualityAssessor::new(),
            correlation: CorrelationEngine::new(),
            transform: TransformEngine::new(),
            harness: EvaluationHarness::new(),
        }
    }

    /// Load a tabular data file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        self.parser.parse_file(path)
    }

    /// Summary statistics for one column; `None` means "no data".
    pub fn describe(&self, dataset: &Dataset, column: &str) -> Option<ColumnSummary> {
        self.statistics.describe(dataset, column)
    }

    /// Assess dataset quality.
    pub fn assess(&self, dataset: &Dataset) -> QualityReport {
        self.quality.assess(dataset)
    }

    /// Correlation matrix over the selected columns; at least two required.
    pub fn correlate(&self, dataset: &Dataset, columns: &[String]) -> Result<CorrelationMatrix> {
        if columns.len() < 2 {
            return Err(GridstatError::Validation(
                "Select at least two columns for correlation analysis".to_string(),
            ));
        }
        Ok(self.correlation.matrix(dataset, columns))
    }

    /// Apply a queue of transform tasks, producing a new dataset.
    pub fn apply(&self, dataset: &Dataset, tasks: &[TransformTask]) -> Dataset {
        self.transform.apply_all(dataset, tasks)
    }

    /// Train and evaluate a model in one shot.
    pub fn train(&self, dataset: &Dataset, config: &TrainConfig) -> Result<EvaluationResult> {
        self.harness.train(dataset, config)
    }

    /// Start a stateful training session (lifecycle-gated prediction).
    pub fn session(&self) -> TrainingSession {
        TrainingSession::new()
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}
