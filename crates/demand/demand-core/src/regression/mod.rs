//! Regression models for booking trendlines
//!
//! ## Algorithms
//!
//! - **Linear Regression**: OLS fit of count against time index
//! - **Polynomial Regression**: Quadratic and cubic least squares via the
//!   normal equations
//! - **Linear System Solver**: Gaussian elimination with partial pivoting

pub mod linear;
pub mod polynomial;
pub mod solver;

pub use linear::LinearRegression;
pub use polynomial::PolynomialRegression;
pub use solver::{solve_linear_system, PIVOT_EPSILON};
