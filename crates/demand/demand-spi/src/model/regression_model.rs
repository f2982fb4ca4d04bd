//! Fitted regression models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DemandError, Result};

/// Polynomial degree of a trendline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TrendDegree {
    /// Straight line (OLS)
    #[default]
    Linear,
    /// Second-order polynomial
    Quadratic,
    /// Third-order polynomial
    Cubic,
}

impl TrendDegree {
    /// Polynomial order (1, 2 or 3)
    pub fn order(self) -> usize {
        match self {
            TrendDegree::Linear => 1,
            TrendDegree::Quadratic => 2,
            TrendDegree::Cubic => 3,
        }
    }

    /// Number of coefficients a model of this degree carries
    pub fn coefficient_count(self) -> usize {
        self.order() + 1
    }
}

impl TryFrom<u8> for TrendDegree {
    type Error = DemandError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(TrendDegree::Linear),
            2 => Ok(TrendDegree::Quadratic),
            3 => Ok(TrendDegree::Cubic),
            other => Err(DemandError::invalid_parameter(
                "trendline_degree",
                format!("must be 1, 2 or 3, got {}", other),
            )),
        }
    }
}

impl From<TrendDegree> for u8 {
    fn from(degree: TrendDegree) -> Self {
        degree.order() as u8
    }
}

impl FromStr for TrendDegree {
    type Err = DemandError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "linear" => Ok(TrendDegree::Linear),
            "2" | "quadratic" => Ok(TrendDegree::Quadratic),
            "3" | "cubic" => Ok(TrendDegree::Cubic),
            other => Err(DemandError::invalid_parameter(
                "trendline_degree",
                format!("unsupported trendline '{}'", other),
            )),
        }
    }
}

impl fmt::Display for TrendDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendDegree::Linear => "linear",
            TrendDegree::Quadratic => "quadratic",
            TrendDegree::Cubic => "cubic",
        };
        write!(f, "{}", s)
    }
}

/// Polynomial in the time index, coefficients lowest order first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRegressionModel")]
pub struct RegressionModel {
    degree: TrendDegree,
    coefficients: Vec<f64>,
}

/// Unchecked wire form, validated through [`RegressionModel::new`].
#[derive(Deserialize)]
struct RawRegressionModel {
    degree: TrendDegree,
    coefficients: Vec<f64>,
}

impl TryFrom<RawRegressionModel> for RegressionModel {
    type Error = DemandError;

    fn try_from(raw: RawRegressionModel) -> Result<Self> {
        Self::new(raw.degree, raw.coefficients)
    }
}

impl RegressionModel {
    /// Create a model, checking the coefficient count and finiteness.
    pub fn new(degree: TrendDegree, coefficients: Vec<f64>) -> Result<Self> {
        if coefficients.len() != degree.coefficient_count() {
            return Err(DemandError::InvalidData(format!(
                "{} model needs {} coefficients, got {}",
                degree,
                degree.coefficient_count(),
                coefficients.len()
            )));
        }
        if let Some(c) = coefficients.iter().find(|c| !c.is_finite()) {
            return Err(DemandError::InvalidData(format!(
                "non-finite coefficient {}",
                c
            )));
        }
        Ok(Self {
            degree,
            coefficients,
        })
    }

    /// Straight line `intercept + slope * x`.
    pub fn linear(intercept: f64, slope: f64) -> Self {
        Self {
            degree: TrendDegree::Linear,
            coefficients: vec![intercept, slope],
        }
    }

    /// Degree of the fitted polynomial
    pub fn degree(&self) -> TrendDegree {
        self.degree
    }

    /// Coefficients, lowest order first
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluate at time index `x` (Horner's rule).
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

/// A fitted trendline together with its in-sample values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendFit {
    /// The fitted model
    pub model: RegressionModel,
    /// Fitted values, one per input observation
    pub fitted: Vec<f64>,
}

impl TrendFit {
    /// Model value one period after the last observation.
    pub fn forecast_next(&self) -> f64 {
        self.model.evaluate(self.fitted.len() as f64)
    }
}
