//! Forecast table row

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the forecast table.
///
/// Observed days carry their `actual` count. The trailing projection row for
/// the next period has `actual == None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Time index (0-based; the projection row has index `n`)
    pub index: usize,
    /// Calendar date of the row
    pub date: NaiveDate,
    /// Observed booking count
    pub actual: Option<f64>,
    /// Moving-average value, undefined during window warm-up
    pub moving_average: Option<f64>,
    /// Exponential smoothing level
    pub exp_smooth: Option<f64>,
    /// Regression line value
    pub regression: Option<f64>,
}

impl ForecastPoint {
    /// Whether this row is the projected next period
    pub fn is_projection(&self) -> bool {
        self.actual.is_none()
    }
}
