// ABOUTME: Least-squares regression over short, evenly spaced score series
// ABOUTME: Supplies the trend slope used by the predictive circuit breaker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

use guardian_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Linear regression results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (change per day)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
}

/// Regression over evenly spaced samples (`x = 0, 1, .., n-1`)
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Ordinary least squares fit of `values` against their index
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 data points
    pub fn linear_regression(values: &[f64]) -> AppResult<RegressionResult> {
        if values.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for regression: need at least 2, got {}",
                values.len()
            )));
        }

        let n = values.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n;

        let (sxy, sxx, syy) = values.iter().enumerate().fold(
            (0.0_f64, 0.0_f64, 0.0_f64),
            |(sxy, sxx, syy), (i, y)| {
                let dx = i as f64 - mean_x;
                let dy = y - mean_y;
                (dx.mul_add(dy, sxy), dx.mul_add(dx, sxx), dy.mul_add(dy, syy))
            },
        );

        let slope = sxy / sxx;
        let intercept = slope.mul_add(-mean_x, mean_y);
        let r_squared = if syy == 0.0 {
            0.0
        } else {
            (sxy * sxy) / (sxx * syy)
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared,
        })
    }

    /// Slope of `values` in chronological order, 0.0 when fewer than 2 points
    #[must_use]
    pub fn trend_slope(values: &[f64]) -> f64 {
        Self::linear_regression(values).map_or(0.0, |r| r.slope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_decline() {
        let result = StatisticalAnalyzer::linear_regression(&[80.0, 75.0, 70.0]).unwrap();
        assert!((result.slope + 5.0).abs() < 1e-9);
        assert!((result.intercept - 80.0).abs() < 1e-9);
        assert!((result.r_squared - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_points() {
        assert!((StatisticalAnalyzer::trend_slope(&[60.0, 64.0]) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_series_has_zero_fit() {
        let result = StatisticalAnalyzer::linear_regression(&[70.0, 70.0, 70.0]).unwrap();
        assert!(result.slope.abs() < f64::EPSILON);
        assert!(result.r_squared.abs() < f64::EPSILON);
    }

    #[test]
    fn test_insufficient_points() {
        assert!(StatisticalAnalyzer::linear_regression(&[70.0]).is_err());
        assert!(StatisticalAnalyzer::trend_slope(&[]).abs() < f64::EPSILON);
        assert!(StatisticalAnalyzer::trend_slope(&[55.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_noisy_series() {
        // y = 70, 60, 65 -> slope = ((-1)(5) + 0 + (1)(0)) / 2 = -2.5
        let slope = StatisticalAnalyzer::trend_slope(&[70.0, 60.0, 65.0]);
        assert!((slope + 2.5).abs() < 1e-9);
    }
}
