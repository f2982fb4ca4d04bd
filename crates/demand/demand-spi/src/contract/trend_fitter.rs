//! Trait for regression trendlines

use crate::model::{TrendDegree, TrendFit};

/// Fits a trendline of counts against the time index `0..n`.
///
/// Implementations never fail: insufficient or degenerate data degrades to a
/// simpler fit, so the returned [`TrendFit::model`] may report a lower degree
/// than [`TrendFitter::degree`].
pub trait TrendFitter: Send + Sync {
    /// Requested degree of the trendline
    fn degree(&self) -> TrendDegree;

    /// Fit the trendline to `values` indexed `0..values.len()`.
    fn fit(&self, values: &[f64]) -> TrendFit;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RegressionModel;

    /// Mock fitter that always returns the mean as a flat line
    struct MeanFitter;

    impl TrendFitter for MeanFitter {
        fn degree(&self) -> TrendDegree {
            TrendDegree::Linear
        }

        fn fit(&self, values: &[f64]) -> TrendFit {
            let mean = if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            TrendFit {
                model: RegressionModel::linear(mean, 0.0),
                fitted: vec![mean; values.len()],
            }
        }
    }

    #[test]
    fn test_mock_fitter() {
        let fit = MeanFitter.fit(&[1.0, 2.0, 3.0]);
        assert_eq!(fit.fitted, vec![2.0, 2.0, 2.0]);
        assert!((fit.forecast_next() - 2.0).abs() < 1e-10);
        assert_eq!(MeanFitter.degree(), TrendDegree::Linear);
    }
}
