//! Demand Consumer API
//!
//! Consumer configuration and request/response types for demand analysis.
//!
//! This crate provides:
//! - [`AnalysisConfig`]: Smoothing and trendline settings with validation
//! - [`RoomRequest`]: Per-room input as supplied by the data layer
//! - [`RoomAnalysis`]: Per-room output handed to the presentation layer
//! - Re-exports from the SPI for convenience

pub mod config;
pub mod request;
pub mod response;

pub use config::AnalysisConfig;
pub use request::RoomRequest;
pub use response::{BookingSummary, RoomAnalysis, TrendPoint, Trendline};

// Re-export SPI types
pub use demand_spi::{
    DemandClassification, DemandError, DemandTier, ForecastPoint, RegressionModel, Result,
    SeriesPoint, Smoother, TimeSeries, TrendDegree, TrendFit, TrendFitter,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AnalysisConfig, BookingSummary, RoomAnalysis, RoomRequest, TrendPoint, Trendline};
    pub use demand_spi::{
        DemandClassification, DemandError, DemandTier, ForecastPoint, RegressionModel, Result,
        SeriesPoint, Smoother, TimeSeries, TrendDegree, TrendFit, TrendFitter,
    };
}
