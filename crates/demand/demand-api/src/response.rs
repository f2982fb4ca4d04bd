//! Per-room analysis output

use demand_spi::{DemandClassification, ForecastPoint, RegressionModel, TrendDegree};
use serde::{Deserialize, Serialize};

/// One evaluated point of a trendline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Time index
    pub x: usize,
    /// Model value at `x`
    pub y: f64,
}

/// Prescriptive trendline for the requested degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trendline {
    /// Degree the caller asked for
    pub requested_degree: TrendDegree,
    /// Model actually fitted; lower than requested after a fallback
    pub model: RegressionModel,
    /// Evaluated points, one per observation
    pub points: Vec<TrendPoint>,
    /// Model value one period after the last observation
    pub next_value: Option<f64>,
}

impl Trendline {
    /// Whether the fit fell back to a lower degree
    pub fn degraded(&self) -> bool {
        self.model.degree() != self.requested_degree
    }
}

/// Descriptive booking figures for a room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    /// Observed days
    pub days: usize,
    /// Bookings used for classification
    pub total_bookings: u64,
    /// `total_bookings * price`
    pub total_sales: f64,
    /// `total_bookings / max(days, 1)`
    pub avg_daily_bookings: f64,
}

/// Everything computed for one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAnalysis {
    pub room_id: Option<u64>,
    pub name: Option<String>,
    /// Forecast table, ending with the next-period projection
    pub forecast: Vec<ForecastPoint>,
    pub trendline: Trendline,
    /// Goodness of fit of the trendline
    pub r_squared: f64,
    pub classification: DemandClassification,
    pub summary: BookingSummary,
}

impl RoomAnalysis {
    /// The next-period projection row, if the series was non-empty
    pub fn projection(&self) -> Option<&ForecastPoint> {
        self.forecast.last().filter(|p| p.is_projection())
    }
}
