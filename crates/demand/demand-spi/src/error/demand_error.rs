//! Demand error types
//!
//! Defines the standardized error type for all demand operations.

use thiserror::Error;

/// Result type alias for demand operations
pub type Result<T> = std::result::Result<T, DemandError>;

/// Errors that can occur while forecasting demand
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemandError {
    /// Invalid configuration value, rejected before any computation
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Pivot fell below the elimination threshold
    #[error("Singular matrix: pivot {pivot:e} in column {column} is below threshold")]
    SingularMatrix { column: usize, pivot: f64 },

    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Malformed input data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl DemandError {
    /// Shorthand for an [`DemandError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether callers are expected to recover from this error with a fallback.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::SingularMatrix { .. } | Self::InsufficientData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Display Tests
    // ==========================================================================

    #[test]
    fn test_invalid_parameter_display() {
        let error = DemandError::invalid_parameter("alpha", "must be between 0 and 1 (exclusive)");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'alpha': must be between 0 and 1 (exclusive)"
        );
    }

    #[test]
    fn test_singular_matrix_display() {
        let error = DemandError::SingularMatrix {
            column: 2,
            pivot: 0.0,
        };
        let display = error.to_string();
        assert!(display.starts_with("Singular matrix"));
        assert!(display.contains("column 2"));
    }

    #[test]
    fn test_insufficient_data_display() {
        let error = DemandError::InsufficientData {
            required: 3,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 3 points, got 1"
        );
    }

    #[test]
    fn test_invalid_data_display() {
        let error = DemandError::InvalidData("dates out of order".to_string());
        assert_eq!(error.to_string(), "Invalid data: dates out of order");
    }

    // ==========================================================================
    // Classification Tests
    // ==========================================================================

    #[test]
    fn test_singular_matrix_is_recoverable() {
        let error = DemandError::SingularMatrix {
            column: 0,
            pivot: 1e-12,
        };
        assert!(error.is_recoverable());
    }

    #[test]
    fn test_configuration_errors_are_fatal() {
        let error = DemandError::invalid_parameter("window_size", "must be at least 1");
        assert!(!error.is_recoverable());
        assert!(!DemandError::InvalidData(String::new()).is_recoverable());
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = DemandError::InsufficientData {
            required: 2,
            actual: 0,
        };
        assert_eq!(error.clone(), error);
        assert_ne!(error, DemandError::InvalidData("x".to_string()));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &DemandError::InvalidData("bad".to_string());
        let _ = error.to_string();
    }

    #[test]
    fn test_result_error_propagation() {
        fn inner() -> Result<f64> {
            Err(DemandError::invalid_parameter("price", "must be positive"))
        }

        fn outer() -> Result<f64> {
            let value = inner()?;
            Ok(value * 2.0)
        }

        assert!(matches!(
            outer(),
            Err(DemandError::InvalidParameter { .. })
        ));
    }
}
