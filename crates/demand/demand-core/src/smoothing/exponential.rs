//! Simple exponential smoothing
//!
//! Level recursion anchored at the first observation:
//!
//! `S[0] = y[0]`, `S[t] = alpha * y[t-1] + (1 - alpha) * S[t-1]` for `t = 1..=n`.
//!
//! The sequence has `n + 1` values; the last one is the forecast for the
//! period after the final observation.

use demand_spi::{DemandError, Result, Smoother};

/// Single-parameter exponential smoothing
///
/// # Example
///
/// ```rust
/// use demand_core::smoothing::ExponentialSmoothing;
///
/// let ses = ExponentialSmoothing::new(0.3).unwrap();
/// let levels = ses.levels(&[2.0, 4.0, 6.0]);
/// assert_eq!(levels.len(), 4);
/// assert!((levels[3] - 3.62).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSmoothing {
    /// Smoothing parameter (0 < alpha < 1)
    alpha: f64,
}

impl Default for ExponentialSmoothing {
    fn default() -> Self {
        Self { alpha: 0.3 }
    }
}

impl ExponentialSmoothing {
    /// Create a new smoother
    ///
    /// # Arguments
    ///
    /// * `alpha` - Smoothing parameter (0 < alpha < 1)
    ///             Higher values give more weight to recent observations
    pub fn new(alpha: f64) -> Result<Self> {
        if !(0.0 < alpha && alpha < 1.0) {
            return Err(DemandError::invalid_parameter(
                "alpha",
                "must be between 0 and 1 (exclusive)",
            ));
        }
        Ok(Self { alpha })
    }

    /// Get alpha parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Level sequence of length `n + 1`; empty for an empty series.
    pub fn levels(&self, values: &[f64]) -> Vec<f64> {
        let Some(&first) = values.first() else {
            return Vec::new();
        };

        let mut levels = Vec::with_capacity(values.len() + 1);
        levels.push(first);
        let mut level = first;
        for &value in values {
            level = self.alpha * value + (1.0 - self.alpha) * level;
            levels.push(level);
        }
        levels
    }
}

impl Smoother for ExponentialSmoothing {
    fn name(&self) -> &str {
        "exponential_smoothing"
    }

    fn smooth(&self, values: &[f64]) -> Vec<Option<f64>> {
        let mut levels = self.levels(values);
        levels.pop();
        levels.into_iter().map(Some).collect()
    }

    fn forecast_next(&self, values: &[f64]) -> Option<f64> {
        self.levels(values).last().copied()
    }
}
