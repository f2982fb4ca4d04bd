//! R-squared (Coefficient of Determination)
//!
//! Measures how much of the variance in the observed counts a prediction
//! series explains. Reported values are clamped to `[0, 1]`.

/// Below this total sum of squares the observations are treated as constant.
const MIN_TOTAL_VARIANCE: f64 = 1e-10;

/// R² over the pairs where a prediction is defined.
///
/// Undefined (`None`) or non-finite predictions are skipped, e.g. the warm-up
/// region of a moving average. Pairs beyond the shorter input are ignored.
///
/// * Fewer than 2 usable pairs: `0.0`
/// * Constant observations: `1.0`
/// * Otherwise `clamp(1 - SSres / SStot, 0, 1)`
///
/// # Example
///
/// ```rust
/// use demand_core::evaluation::r_squared;
///
/// let actual = [1.0, 2.0, 3.0, 4.0];
/// let predicted = [None, None, Some(3.0), Some(4.0)];
/// assert!((r_squared(&actual, &predicted) - 1.0).abs() < 1e-10);
/// ```
pub fn r_squared(actual: &[f64], predicted: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = actual
        .iter()
        .zip(predicted)
        .filter_map(|(&y, p)| p.filter(|f| f.is_finite()).map(|f| (y, f)))
        .collect();

    if pairs.len() < 2 {
        return 0.0;
    }

    let mean = pairs.iter().map(|(y, _)| y).sum::<f64>() / pairs.len() as f64;
    let ss_tot: f64 = pairs.iter().map(|(y, _)| (y - mean).powi(2)).sum();
    let ss_res: f64 = pairs.iter().map(|(y, f)| (y - f).powi(2)).sum();

    if ss_tot < MIN_TOTAL_VARIANCE {
        return 1.0;
    }

    (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
}

/// R² for a prediction series defined at every point.
pub fn r_squared_dense(actual: &[f64], predicted: &[f64]) -> f64 {
    let predicted: Vec<Option<f64>> = predicted.iter().copied().map(Some).collect();
    r_squared(actual, &predicted)
}
