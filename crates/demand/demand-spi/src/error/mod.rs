//! Error types for demand operations
//!
//! This module provides the [`DemandError`] enum and [`Result`] type alias
//! for standardized error handling across all demand components.

mod demand_error;

pub use demand_error::{DemandError, Result};
