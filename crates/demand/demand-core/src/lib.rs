//! Demand Forecasting Core Implementations
//!
//! Smoothing, regression, fit evaluation and pricing for daily booking
//! counts. All operations are pure functions of their inputs.

// ============================================================================
// Algorithm Modules
// ============================================================================
pub mod analyzer;
pub mod evaluation;
pub mod pricing;
pub mod regression;
pub mod smoothing;

// ============================================================================
// Algorithm Exports
// ============================================================================
pub use analyzer::{trend_fitter, DemandAnalyzer};
pub use evaluation::{r_squared, r_squared_dense};
pub use pricing::{summarize, DemandClassifier};
pub use regression::{solve_linear_system, LinearRegression, PolynomialRegression};
pub use smoothing::{ExponentialSmoothing, MovingAverage};

// ============================================================================
// Re-exports from API and SPI
// ============================================================================
pub use demand_api::{AnalysisConfig, BookingSummary, RoomAnalysis, RoomRequest, TrendPoint, Trendline};
pub use demand_spi::{
    DemandClassification, DemandError, DemandTier, ForecastPoint, RegressionModel, Result,
    SeriesPoint, Smoother, TimeSeries, TrendDegree, TrendFit, TrendFitter,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DemandAnalyzer, DemandClassifier, ExponentialSmoothing, LinearRegression, MovingAverage,
        PolynomialRegression,
    };
    pub use demand_api::prelude::*;
}
