//! Quality findings and the assessment report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of quality issue detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Empty cells in a column.
    MissingValues,
    /// A column mixes numeric and text cells.
    InconsistentTypes,
    /// Values outside the IQR fences.
    Outliers,
    /// Identical data rows.
    DuplicateRows,
}

impl FindingKind {
    /// Get a human-readable label for the finding kind.
    pub fn label(&self) -> &'static str {
        match self {
            FindingKind::MissingValues => "Missing Values",
            FindingKind::InconsistentTypes => "Inconsistent Types",
            FindingKind::Outliers => "Outliers",
            FindingKind::DuplicateRows => "Duplicate Rows",
        }
    }

    /// Remediation hint shown alongside findings of this kind.
    pub fn suggestion(&self) -> &'static str {
        match self {
            FindingKind::MissingValues => {
                "Consider removing or imputing rows with missing data"
            }
            FindingKind::InconsistentTypes => {
                "Investigate and potentially transform columns with inconsistent data types"
            }
            FindingKind::Outliers => {
                "Review and possibly remove or adjust outliers in numeric columns"
            }
            FindingKind::DuplicateRows => "Deduplicate identical rows before analysis",
        }
    }
}

/// A single quality issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Kind of issue.
    pub kind: FindingKind,
    /// Affected column, if the issue is column-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Human-readable description.
    pub description: String,
    /// When detected.
    pub detected_at: DateTime<Utc>,
}

impl Finding {
    pub fn new(kind: FindingKind, column: Option<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            column,
            description: description.into(),
            detected_at: Utc::now(),
        }
    }
}

/// Result of assessing a dataset. Produced fresh on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Percentage of cells that contain data, in [0, 100].
    pub completeness: f64,
    /// Ordered findings, column-scoped issues first in header order.
    pub findings: Vec<Finding>,
    /// Number of data rows that duplicate an earlier row.
    pub duplicate_rows: usize,
}

impl QualityReport {
    /// The findings' descriptions, in order.
    pub fn issues(&self) -> Vec<&str> {
        self.findings.iter().map(|f| f.description.as_str()).collect()
    }

    /// Deduplicated remediation hints for the kinds of issues present.
    pub fn suggestions(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for finding in &self.findings {
            let hint = finding.kind.suggestion();
            if !seen.contains(&hint) {
                seen.push(hint);
            }
        }
        seen
    }

    /// True when no issues were found.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
