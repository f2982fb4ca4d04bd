//! Trailing moving average

use demand_spi::{DemandError, Result, Smoother};

/// Simple moving average over a trailing window.
///
/// The value at index `i` is the mean of the `window` counts ending at `i`;
/// indices inside the warm-up region (`i < window - 1`) are undefined.
///
/// # Example
///
/// ```rust
/// use demand_core::smoothing::MovingAverage;
///
/// let ma = MovingAverage::new(3).unwrap();
/// let values = ma.calculate(&[2.0, 4.0, 6.0]);
/// assert_eq!(values, vec![None, None, Some(4.0)]);
/// assert_eq!(ma.forecast_next(&[2.0, 4.0, 6.0]), Some(4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    window: usize,
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self { window: 3 }
    }
}

impl MovingAverage {
    /// Create a moving average with the given window (must be >= 1).
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(DemandError::invalid_parameter(
                "window_size",
                "must be at least 1",
            ));
        }
        Ok(Self { window })
    }

    /// Get the window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// One value per input; `None` during warm-up.
    pub fn calculate(&self, values: &[f64]) -> Vec<Option<f64>> {
        let warmup = (self.window - 1).min(values.len());
        std::iter::repeat(None)
            .take(warmup)
            .chain(values.windows(self.window).map(|w| Some(mean(w))))
            .collect()
    }

    /// Mean of the last `min(window, n)` values.
    ///
    /// A series shorter than the window is averaged over what is available.
    pub fn forecast_next(&self, values: &[f64]) -> Option<f64> {
        let tail = &values[values.len().saturating_sub(self.window)..];
        if tail.is_empty() {
            None
        } else {
            Some(mean(tail))
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

impl Smoother for MovingAverage {
    fn name(&self) -> &str {
        "moving_average"
    }

    fn smooth(&self, values: &[f64]) -> Vec<Option<f64>> {
        self.calculate(values)
    }

    fn forecast_next(&self, values: &[f64]) -> Option<f64> {
        MovingAverage::forecast_next(self, values)
    }
}
