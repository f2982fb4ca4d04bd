//! Per-room analysis input

use chrono::NaiveDate;
use demand_spi::{DemandError, Result, TimeSeries, TrendDegree};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;

/// Input for one room, as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRequest {
    /// Room identifier, echoed back in the analysis
    #[serde(default)]
    pub room_id: Option<u64>,
    /// Display name, echoed back in the analysis
    #[serde(default)]
    pub name: Option<String>,
    /// Daily booking counts
    pub series: TimeSeries,
    /// Current nightly rate; 0 when absent, which `validate` rejects
    /// unless the caller sets a price first
    #[serde(default)]
    pub price: f64,
    /// Bookings used for classification; defaults to the series total
    #[serde(default)]
    pub total_bookings: Option<u64>,
    /// Trendline degree override
    #[serde(default)]
    pub trendline_degree: Option<TrendDegree>,
    /// Moving-average window override
    #[serde(default)]
    pub window_size: Option<usize>,
    /// Smoothing factor override
    #[serde(default)]
    pub alpha: Option<f64>,
    /// Inclusive lower bound for the forecast table
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound for the forecast table
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl RoomRequest {
    /// Request with only the required fields set.
    pub fn new(series: TimeSeries, price: f64) -> Self {
        Self {
            room_id: None,
            name: None,
            series,
            price,
            total_bookings: None,
            trendline_degree: None,
            window_size: None,
            alpha: None,
            start: None,
            end: None,
        }
    }

    /// Bookings used for classification
    pub fn total_bookings(&self) -> u64 {
        self.total_bookings
            .unwrap_or_else(|| self.series.total_count())
    }

    /// Merge this request's overrides into `base` and validate the result.
    pub fn resolve_config(&self, base: &AnalysisConfig) -> Result<AnalysisConfig> {
        let mut config = *base;
        if let Some(window_size) = self.window_size {
            config.window_size = window_size;
        }
        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if let Some(degree) = self.trendline_degree {
            config.trendline_degree = degree;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check the non-configuration inputs.
    pub fn validate(&self) -> Result<()> {
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(DemandError::invalid_parameter(
                "price",
                format!("must be positive and finite, got {}", self.price),
            ));
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(DemandError::invalid_parameter(
                    "start",
                    format!("{} is after end {}", start, end),
                ));
            }
        }
        Ok(())
    }

    /// Series restricted to the requested date range
    pub fn filtered_series(&self) -> TimeSeries {
        self.series.between(self.start, self.end)
    }
}
