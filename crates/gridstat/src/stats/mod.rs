//! Descriptive statistics and correlation engines.

mod correlation;
mod descriptive;

pub use correlation::{CorrelationEngine, CorrelationEntry, CorrelationMatrix};
pub use descriptive::{ColumnSummary, StatisticsEngine};

pub(crate) use descriptive::{lower_median, mean, mode};
