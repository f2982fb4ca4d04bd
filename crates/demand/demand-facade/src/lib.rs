//! Demand Facade
//!
//! High-level API for booking demand analysis. Re-exports all public types
//! from the demand stack for convenient usage.

// Re-export everything from API (which includes SPI)
pub use demand_api::*;

// Explicit re-exports for documentation
pub use demand_api::prelude;

// Re-export core modules for direct access
pub use demand_core::{analyzer, evaluation, pricing, regression, smoothing};

// Re-export algorithms at root
pub use demand_core::{
    r_squared, r_squared_dense, solve_linear_system, summarize, trend_fitter, DemandAnalyzer,
    DemandClassifier, ExponentialSmoothing, LinearRegression, MovingAverage, PolynomialRegression,
};

/// Analyze one room with the default configuration.
pub fn analyze_room(request: &RoomRequest) -> Result<RoomAnalysis> {
    DemandAnalyzer::new(AnalysisConfig::default())?.analyze(request)
}
