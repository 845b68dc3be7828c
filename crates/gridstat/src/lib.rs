//! Gridstat: a tabular analytics kernel for interactive CSV exploration.
//!
//! Gridstat takes a parsed dataset (a header row plus data rows of string
//! cells) and computes summary statistics, quality reports, correlation
//! matrices, column transforms, and simple regression/clustering evaluations
//! for a presentation layer to display.
//!
//! # Core Principles
//!
//! - **Values, not state**: a `Dataset` is immutable; transforms return a new one
//! - **Neutral failures**: unresolvable columns and numeric edge cases degrade
//!   to empty results or defined values, never NaN or a crash
//! - **Deterministic**: identical inputs produce identical outputs, including
//!   train/test splits and forest training
//!
//! # Example
//!
//! ```no_run
//! use gridstat::Workbench;
//!
//! let workbench = Workbench::new();
//! let (dataset, source) = workbench.load("data.csv").unwrap();
//!
//! let report = workbench.assess(&dataset);
//! println!("Rows: {}", source.row_count);
//! println!("Completeness: {:.2}%", report.completeness);
//! ```

pub mod error;
pub mod export;
pub mod input;
pub mod ml;
pub mod quality;
pub mod stats;
pub mod transform;
pub mod workflow;

mod workbench;

pub use crate::workbench::{Workbench, WorkbenchConfig};
pub use error::{GridstatError, Result};
pub use export::ExportFormat;
pub use input::{Dataset, SourceMetadata};
pub use ml::{EvaluationResult, ModelSpec, TrainConfig, TrainingPhase};
pub use quality::{Finding, FindingKind, QualityReport};
pub use stats::{ColumnSummary, CorrelationMatrix};
pub use transform::{FillMethod, SortOrder, TransformTask};
pub use workflow::{ArmingGate, GateState, TrainingSession, TrainingState};
