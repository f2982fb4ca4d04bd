//! Polynomial least squares via the normal equations
//!
//! For degree `d` the system is `A * c = b` with
//! `A[i][j] = Σ x^(i+j)` and `b[i] = Σ x^i * y` for `i, j = 0..=d`,
//! solved by [`solve_linear_system`]. Too few points or a singular system
//! falls back to [`LinearRegression`].

use demand_spi::{DemandError, RegressionModel, Result, TrendDegree, TrendFit, TrendFitter};
use tracing::debug;

use super::linear::{check_points, time_index, LinearRegression};
use super::solver::solve_linear_system;

/// Below this many points no polynomial is attempted.
pub const MIN_POLYNOMIAL_POINTS: usize = 3;

/// Quadratic or cubic trendline
///
/// # Example
///
/// ```rust
/// use demand_core::regression::PolynomialRegression;
/// use demand_core::{TrendDegree, TrendFitter};
///
/// let y: Vec<f64> = (0..6).map(|x| (2 * x * x + 3 * x + 1) as f64).collect();
/// let fit = PolynomialRegression::quadratic().fit(&y);
/// assert_eq!(fit.model.degree(), TrendDegree::Quadratic);
/// assert!((fit.model.coefficients()[2] - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialRegression {
    degree: TrendDegree,
}

impl PolynomialRegression {
    /// Create a polynomial regression of degree 2 or 3.
    pub fn new(degree: TrendDegree) -> Result<Self> {
        if degree == TrendDegree::Linear {
            return Err(DemandError::invalid_parameter(
                "degree",
                "polynomial regression requires degree 2 or 3",
            ));
        }
        Ok(Self { degree })
    }

    /// Second-order fit
    pub fn quadratic() -> Self {
        Self {
            degree: TrendDegree::Quadratic,
        }
    }

    /// Third-order fit
    pub fn cubic() -> Self {
        Self {
            degree: TrendDegree::Cubic,
        }
    }

    /// Fit against explicit `x` values, falling back to a linear fit.
    ///
    /// # Errors
    ///
    /// [`DemandError::InvalidData`] for mismatched lengths or non-finite values.
    pub fn fit_xy(&self, x: &[f64], y: &[f64]) -> Result<TrendFit> {
        check_points(x, y)?;
        Ok(self.fit_points(x, y))
    }

    /// Fit against explicit `x` values without falling back.
    ///
    /// # Errors
    ///
    /// * [`DemandError::InsufficientData`] below the minimum point count
    /// * [`DemandError::SingularMatrix`] if the normal equations are singular
    /// * [`DemandError::InvalidData`] for mismatched lengths, non-finite
    ///   inputs or non-finite results
    pub fn try_fit_xy(&self, x: &[f64], y: &[f64]) -> Result<TrendFit> {
        check_points(x, y)?;
        self.solve(x, y)
    }

    fn solve(&self, x: &[f64], y: &[f64]) -> Result<TrendFit> {
        let needed = MIN_POLYNOMIAL_POINTS.max(self.degree.coefficient_count());
        if y.len() < needed {
            return Err(DemandError::InsufficientData {
                required: needed,
                actual: y.len(),
            });
        }

        let (a, b) = normal_equations(x, y, self.degree.order());
        let coefficients = solve_linear_system(&a, &b)?;
        let model = RegressionModel::new(self.degree, coefficients)?;

        let fitted: Vec<f64> = x.iter().map(|&xi| model.evaluate(xi)).collect();
        if fitted.iter().any(|v| !v.is_finite()) {
            return Err(DemandError::InvalidData(
                "polynomial evaluates to non-finite values".to_string(),
            ));
        }

        Ok(TrendFit { model, fitted })
    }

    pub(crate) fn fit_points(&self, x: &[f64], y: &[f64]) -> TrendFit {
        match self.solve(x, y) {
            Ok(fit) => fit,
            Err(e) => {
                debug!(
                    degree = %self.degree,
                    points = y.len(),
                    error = %e,
                    "polynomial fit failed, using linear regression"
                );
                LinearRegression.fit_points(x, y)
            }
        }
    }
}

/// Build `(A, b)` for a least-squares polynomial of the given order.
fn normal_equations(x: &[f64], y: &[f64], order: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let size = order + 1;

    // power_sums[k] = Σ x^k for k = 0..=2*order
    let mut power_sums = vec![0.0; 2 * order + 1];
    // cross_sums[k] = Σ x^k * y for k = 0..=order
    let mut cross_sums = vec![0.0; size];

    for (&xi, &yi) in x.iter().zip(y) {
        let mut p = 1.0;
        for k in 0..power_sums.len() {
            power_sums[k] += p;
            if k < size {
                cross_sums[k] += p * yi;
            }
            p *= xi;
        }
    }

    let a: Vec<Vec<f64>> = (0..size)
        .map(|i| (0..size).map(|j| power_sums[i + j]).collect())
        .collect();
    (a, cross_sums)
}

impl TrendFitter for PolynomialRegression {
    fn degree(&self) -> TrendDegree {
        self.degree
    }

    fn fit(&self, values: &[f64]) -> TrendFit {
        let x = time_index(values.len());
        self.fit_points(&x, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadratic_data(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let x = i as f64;
                2.0 * x * x + 3.0 * x + 1.0
            })
            .collect()
    }

    #[test]
    fn test_quadratic_recovers_coefficients() {
        let fit = PolynomialRegression::quadratic().fit(&quadratic_data(8));
        let c = fit.model.coefficients();

        assert_eq!(fit.model.degree(), TrendDegree::Quadratic);
        assert!((c[0] - 1.0).abs() < 1e-6);
        assert!((c[1] - 3.0).abs() < 1e-6);
        assert!((c[2] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_recovers_coefficients() {
        // y = 0.5x^3 - 2x^2 + x + 4
        let y: Vec<f64> = (0..10)
            .map(|i| {
                let x = i as f64;
                0.5 * x.powi(3) - 2.0 * x * x + x + 4.0
            })
            .collect();
        let fit = PolynomialRegression::cubic().fit(&y);
        let c = fit.model.coefficients();

        assert_eq!(fit.model.degree(), TrendDegree::Cubic);
        assert_eq!(c.len(), 4);
        assert!((c[0] - 4.0).abs() < 1e-6);
        assert!((c[1] - 1.0).abs() < 1e-6);
        assert!((c[2] + 2.0).abs() < 1e-6);
        assert!((c[3] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_is_not_linear() {
        let y = [1.0, 0.0, 3.0, 1.0, 6.0, 2.0, 9.0];
        let cubic = PolynomialRegression::cubic().fit(&y);
        let linear = LinearRegression.fit(&y);
        assert_eq!(cubic.model.degree(), TrendDegree::Cubic);
        assert_ne!(cubic.fitted, linear.fitted);
    }

    #[test]
    fn test_too_few_points_falls_back() {
        let fit = PolynomialRegression::quadratic().fit(&[1.0, 3.0]);
        assert_eq!(fit.model.degree(), TrendDegree::Linear);
        assert!((fit.fitted[0] - 1.0).abs() < 1e-10);
        assert!((fit.fitted[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_cubic_with_three_points_falls_back() {
        let fit = PolynomialRegression::cubic().fit(&[2.0, 4.0, 6.0]);
        assert_eq!(fit.model.degree(), TrendDegree::Linear);
        assert!((fit.forecast_next() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_singular_system_falls_back() {
        // All x identical makes the normal equations singular
        let fit = PolynomialRegression::quadratic()
            .fit_xy(&[1.0, 1.0, 1.0, 1.0], &[2.0, 3.0, 4.0, 5.0])
            .unwrap();
        assert_eq!(fit.model.degree(), TrendDegree::Linear);
        assert!(fit.fitted.iter().all(|v| (v - 3.5).abs() < 1e-10));
    }

    #[test]
    fn test_constant_series() {
        let fit = PolynomialRegression::quadratic().fit(&[5.0; 5]);
        assert!(fit.fitted.iter().all(|v| (v - 5.0).abs() < 1e-6));
        assert!((fit.forecast_next() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_linear_degree_rejected() {
        assert!(PolynomialRegression::new(TrendDegree::Linear).is_err());
        assert!(PolynomialRegression::new(TrendDegree::Cubic).is_ok());
    }

    #[test]
    fn test_try_fit_reports_failures() {
        let quadratic = PolynomialRegression::quadratic();
        assert!(matches!(
            quadratic.try_fit_xy(&[0.0, 1.0], &[1.0, 2.0]),
            Err(DemandError::InsufficientData { required: 3, actual: 2 })
        ));
        assert!(matches!(
            quadratic.try_fit_xy(&[2.0; 4], &[1.0, 2.0, 3.0, 4.0]),
            Err(DemandError::SingularMatrix { .. })
        ));
        assert!(matches!(
            PolynomialRegression::cubic().try_fit_xy(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(DemandError::InsufficientData { required: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_non_finite_input_rejected_before_fallback() {
        let quadratic = PolynomialRegression::quadratic();
        let x = [0.0, f64::NAN, 2.0, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0];

        assert!(matches!(quadratic.fit_xy(&x, &y), Err(DemandError::InvalidData(_))));
        assert!(matches!(quadratic.try_fit_xy(&x, &y), Err(DemandError::InvalidData(_))));
        assert!(matches!(
            PolynomialRegression::cubic().fit_xy(&[0.0, 1.0, 2.0, 3.0], &[1.0, f64::INFINITY, 3.0, 4.0]),
            Err(DemandError::InvalidData(_))
        ));
    }

    #[test]
    fn test_fit_xy_mismatch() {
        let result = PolynomialRegression::quadratic().fit_xy(&[0.0, 1.0, 2.0], &[1.0]);
        assert!(matches!(result, Err(DemandError::InvalidData(_))));
    }

    #[test]
    fn test_normal_equations_layout() {
        let (a, b) = normal_equations(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], 2);
        assert_eq!(a[0], vec![3.0, 3.0, 5.0]);
        assert_eq!(a[1], vec![3.0, 5.0, 9.0]);
        assert_eq!(a[2], vec![5.0, 9.0, 17.0]);
        assert_eq!(b, vec![6.0, 8.0, 14.0]);
    }
}
