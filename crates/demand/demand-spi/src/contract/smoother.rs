//! Trait for one-step-ahead smoothing forecasters

/// A smoother turns a count series into a per-observation smoothed series
/// plus a forecast for the next, not-yet-observed period.
///
/// # Example
///
/// ```rust,ignore
/// use demand_spi::Smoother;
///
/// fn next_value<S: Smoother>(smoother: &S, counts: &[f64]) -> Option<f64> {
///     smoother.forecast_next(counts)
/// }
/// ```
pub trait Smoother: Send + Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &str;

    /// One value per observation; `None` where the value is undefined.
    fn smooth(&self, values: &[f64]) -> Vec<Option<f64>>;

    /// Forecast for the period after the last observation.
    ///
    /// Returns `None` only when `values` is empty.
    fn forecast_next(&self, values: &[f64]) -> Option<f64>;
}
