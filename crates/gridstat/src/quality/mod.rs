//! Data quality assessment engine.

mod assessor;
mod report;

pub use assessor::QualityAssessor;
pub use report::{Finding, FindingKind, QualityReport};
