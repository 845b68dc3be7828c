//! Simple linear regression over a single feature.

use crate::error::{GridstatError, Result};

/// Least-squares fit of y = slope * x + intercept.
#[derive(Debug, Clone)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    /// Fit from paired observations.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.is_empty() || x.len() != y.len() {
            return Err(GridstatError::Validation(
                "Linear regression requires non-empty, equal-length inputs".to_string(),
            ));
        }

        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let sxx: f64 = x.iter().map(|v| (v - mean_x).powi(2)).sum();
        let sxy: f64 = x
            .iter()
            .zip(y)
            .map(|(a, b)| (a - mean_x) * (b - mean_y))
            .sum();

        // A constant feature carries no signal; fall back to the mean.
        let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
        let intercept = mean_y - slope * mean_x;

        Ok(Self { slope, intercept })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The fitted equation, for display.
    pub fn equation(&self) -> String {
        format!("y = {:.4}x + {:.4}", self.slope, self.intercept)
    }
}
