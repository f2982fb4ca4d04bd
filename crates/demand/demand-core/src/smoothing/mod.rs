//! Smoothing algorithms for booking-count series
//!
//! ## Algorithms
//!
//! - **Moving Average**: Trailing window mean
//! - **Exponential Smoothing**: Single-parameter level smoothing

pub mod exponential;
pub mod moving_average;

pub use exponential::ExponentialSmoothing;
pub use moving_average::MovingAverage;
