//! Analysis configuration

use demand_spi::{DemandError, Result, TrendDegree};
use serde::{Deserialize, Serialize};

/// Default moving-average window
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Default exponential smoothing factor
pub const DEFAULT_ALPHA: f64 = 0.3;

/// Settings shared by every room in an analysis run.
///
/// Values are checked by [`AnalysisConfig::validate`]; malformed settings are
/// rejected, never replaced by defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Moving-average window (>= 1)
    pub window_size: usize,
    /// Exponential smoothing factor in (0, 1)
    pub alpha: f64,
    /// Degree of the prescriptive trendline
    pub trendline_degree: TrendDegree,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            alpha: DEFAULT_ALPHA,
            trendline_degree: TrendDegree::Linear,
        }
    }
}

impl AnalysisConfig {
    /// Set the moving-average window
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the smoothing factor
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the trendline degree
    pub fn with_trendline_degree(mut self, degree: TrendDegree) -> Self {
        self.trendline_degree = degree;
        self
    }

    /// Check every setting, failing on the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(DemandError::invalid_parameter(
                "window_size",
                "must be at least 1",
            ));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(DemandError::invalid_parameter(
                "alpha",
                format!("must be between 0 and 1 (exclusive), got {}", self.alpha),
            ));
        }
        Ok(())
    }
}
