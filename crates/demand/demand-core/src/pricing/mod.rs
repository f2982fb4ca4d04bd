//! Demand classification and descriptive booking figures

pub mod classifier;
pub mod summary;

pub use classifier::DemandClassifier;
pub use summary::summarize;
