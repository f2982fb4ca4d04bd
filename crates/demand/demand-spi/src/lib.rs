//! Demand Service Provider Interface
//!
//! Defines the data model, contract traits and error type shared by every
//! demand forecasting component:
//!
//! - [`TimeSeries`]: Validated, date-ordered booking counts for one room
//! - [`Smoother`]: Trait for one-step-ahead smoothing forecasters
//! - [`TrendFitter`]: Trait for regression trendlines over a series
//! - [`DemandError`]: Standardized error type for all demand operations
//! - [`Result`]: Convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Smoother, TrendFitter};
pub use error::{DemandError, Result};
pub use model::{
    DemandClassification, DemandTier, ForecastPoint, RegressionModel, SeriesPoint, TimeSeries,
    TrendDegree, TrendFit,
};
