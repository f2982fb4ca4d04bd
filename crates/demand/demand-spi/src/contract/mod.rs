//! Contract module containing trait definitions for demand components
//!
//! - [`Smoother`]: One-step-ahead smoothing forecasters
//! - [`TrendFitter`]: Regression trendlines over the time index

mod smoother;
mod trend_fitter;

pub use smoother::Smoother;
pub use trend_fitter::TrendFitter;
