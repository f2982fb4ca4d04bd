//! Linear Regression for booking trends
//!
//! Uses ordinary least squares (OLS) to fit a straight line through counts
//! indexed by day.
//!
//! ## Degenerate input
//!
//! - Fewer than 2 points: fitted values echo the input
//! - All `x` identical: every fitted value is the mean of `y`

use demand_spi::{DemandError, RegressionModel, Result, TrendDegree, TrendFit, TrendFitter};

/// Below this `Σ(x - x̄)²` the slope is undefined.
const MIN_X_SPREAD: f64 = 1e-10;

/// Ordinary least squares line
///
/// Fits `y = intercept + slope * x`.
///
/// # Example
///
/// ```rust
/// use demand_core::regression::LinearRegression;
/// use demand_core::TrendFitter;
///
/// let fit = LinearRegression.fit(&[2.0, 4.0, 6.0]);
/// assert!((fit.model.coefficients()[1] - 2.0).abs() < 1e-10);
/// assert!((fit.forecast_next() - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearRegression;

impl LinearRegression {
    /// Fit against explicit `x` values.
    ///
    /// # Errors
    ///
    /// [`DemandError::InvalidData`] for mismatched lengths or non-finite values.
    pub fn fit_xy(&self, x: &[f64], y: &[f64]) -> Result<TrendFit> {
        check_points(x, y)?;
        Ok(self.fit_points(x, y))
    }

    /// OLS over equal-length slices.
    pub(crate) fn fit_points(&self, x: &[f64], y: &[f64]) -> TrendFit {
        let n = y.len();
        if n < 2 {
            return TrendFit {
                model: RegressionModel::linear(y.first().copied().unwrap_or(0.0), 0.0),
                fitted: y.to_vec(),
            };
        }

        let nf = n as f64;
        let x_mean = x.iter().sum::<f64>() / nf;
        let y_mean = y.iter().sum::<f64>() / nf;

        let (numerator, denominator) = x.iter().zip(y).fold((0.0, 0.0), |(num, den), (&xi, &yi)| {
            let dx = xi - x_mean;
            (num + dx * (yi - y_mean), den + dx * dx)
        });

        if denominator < MIN_X_SPREAD {
            return TrendFit {
                model: RegressionModel::linear(y_mean, 0.0),
                fitted: vec![y_mean; n],
            };
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;
        let model = RegressionModel::linear(intercept, slope);
        let fitted = x.iter().map(|&xi| model.evaluate(xi)).collect();

        TrendFit { model, fitted }
    }
}

impl TrendFitter for LinearRegression {
    fn degree(&self) -> TrendDegree {
        TrendDegree::Linear
    }

    fn fit(&self, values: &[f64]) -> TrendFit {
        let x = time_index(values.len());
        self.fit_points(&x, values)
    }
}

/// Reject `(x, y)` inputs of unequal length or with non-finite values.
pub(crate) fn check_points(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(DemandError::InvalidData(format!(
            "x has {} values, y has {}",
            x.len(),
            y.len()
        )));
    }
    if let Some(v) = x.iter().chain(y).find(|v| !v.is_finite()) {
        return Err(DemandError::InvalidData(format!(
            "regression input contains non-finite value {}",
            v
        )));
    }
    Ok(())
}

/// `0.0, 1.0, ..., (n - 1) as f64`
pub(crate) fn time_index(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}
