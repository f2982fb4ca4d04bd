//! Fit quality metrics

pub mod goodness_of_fit;

pub use goodness_of_fit::{r_squared, r_squared_dense};
