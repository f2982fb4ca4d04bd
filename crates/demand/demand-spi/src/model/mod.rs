//! Model module containing data structures

mod demand_classification;
mod forecast_point;
mod regression_model;
mod time_series;

pub use demand_classification::{DemandClassification, DemandTier};
pub use forecast_point::ForecastPoint;
pub use regression_model::{RegressionModel, TrendDegree, TrendFit};
pub use time_series::{SeriesPoint, TimeSeries};
