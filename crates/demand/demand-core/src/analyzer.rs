//! Per-room demand analysis
//!
//! Runs the smoothers and regressors over a room's booking series and
//! assembles the forecast table, trendline, fit quality, classification and
//! summary. Every call recomputes from its inputs.

use demand_api::{AnalysisConfig, RoomAnalysis, RoomRequest, TrendPoint, Trendline};
use demand_spi::{ForecastPoint, Result, Smoother, TimeSeries, TrendDegree, TrendFitter};
use tracing::debug;

use crate::evaluation::r_squared_dense;
use crate::pricing::{summarize, DemandClassifier};
use crate::regression::{LinearRegression, PolynomialRegression};
use crate::smoothing::{ExponentialSmoothing, MovingAverage};

/// Trend fitter for a degree.
pub fn trend_fitter(degree: TrendDegree) -> Box<dyn TrendFitter> {
    match degree {
        TrendDegree::Linear => Box::new(LinearRegression),
        TrendDegree::Quadratic => Box::new(PolynomialRegression::quadratic()),
        TrendDegree::Cubic => Box::new(PolynomialRegression::cubic()),
    }
}

/// Demand analyzer bound to a validated configuration.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use demand_core::analyzer::DemandAnalyzer;
/// use demand_core::{AnalysisConfig, TimeSeries};
///
/// let start = NaiveDate::from_ymd_opt(2025, 10, 25).unwrap();
/// let series = TimeSeries::from_daily_counts(start, &[2, 4, 6]).unwrap();
/// let analyzer = DemandAnalyzer::new(AnalysisConfig::default()).unwrap();
///
/// let table = analyzer.forecast(&series);
/// assert_eq!(table.len(), 4);
/// assert!((table[3].regression.unwrap() - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DemandAnalyzer {
    config: AnalysisConfig,
    moving_average: MovingAverage,
    exp_smoothing: ExponentialSmoothing,
}

impl DemandAnalyzer {
    /// Create an analyzer, rejecting invalid configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            moving_average: MovingAverage::new(config.window_size)?,
            exp_smoothing: ExponentialSmoothing::new(config.alpha)?,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Forecast table: one row per observation plus the next-period row.
    ///
    /// The regression column is always the linear trend. An empty series
    /// yields an empty table; a series ending on the last representable date
    /// has no projection row.
    pub fn forecast(&self, series: &TimeSeries) -> Vec<ForecastPoint> {
        if series.is_empty() {
            return Vec::new();
        }
        let counts = series.counts();
        let n = counts.len();

        let moving_average = self.moving_average.smooth(&counts);
        let levels = self.exp_smoothing.levels(&counts);
        let linear = LinearRegression.fit(&counts);

        let mut table: Vec<ForecastPoint> = series
            .points()
            .iter()
            .enumerate()
            .map(|(i, point)| ForecastPoint {
                index: i,
                date: point.date,
                actual: Some(counts[i]),
                moving_average: moving_average[i],
                exp_smooth: levels.get(i).copied(),
                regression: linear.fitted.get(i).copied(),
            })
            .collect();

        match series.next_date() {
            Some(next_date) => table.push(ForecastPoint {
                index: n,
                date: next_date,
                actual: None,
                moving_average: self.moving_average.forecast_next(&counts),
                exp_smooth: self.exp_smoothing.forecast_next(&counts),
                regression: Some(linear.forecast_next()),
            }),
            None => debug!(
                last_date = ?series.last_date(),
                "no calendar day after series, projection skipped"
            ),
        }

        table
    }

    /// Trendline of the configured degree over the whole series.
    pub fn trendline(&self, series: &TimeSeries) -> Trendline {
        let counts = series.counts();
        let requested_degree = self.config.trendline_degree;
        let fit = trend_fitter(requested_degree).fit(&counts);

        if fit.model.degree() != requested_degree {
            debug!(
                requested = %requested_degree,
                fitted = %fit.model.degree(),
                points = counts.len(),
                "trendline degraded"
            );
        }

        let next_value = (!counts.is_empty()).then(|| fit.forecast_next());
        let points = fit
            .fitted
            .iter()
            .enumerate()
            .map(|(x, &y)| TrendPoint { x, y })
            .collect();

        Trendline {
            requested_degree,
            model: fit.model,
            points,
            next_value,
        }
    }

    /// Full analysis of one room.
    ///
    /// Request overrides are merged into this analyzer's configuration. The
    /// forecast table honors the request's date range; the trendline, fit
    /// quality, classification and summary use the whole series.
    ///
    /// # Errors
    ///
    /// [`demand_spi::DemandError::InvalidParameter`] for an invalid price,
    /// date range or configuration override, or a price too large to
    /// produce finite sales figures.
    pub fn analyze(&self, request: &RoomRequest) -> Result<RoomAnalysis> {
        request.validate()?;
        let config = request.resolve_config(&self.config)?;
        let analyzer = if config == self.config {
            self.clone()
        } else {
            Self::new(config)?
        };

        debug!(
            room_id = ?request.room_id,
            days = request.series.len(),
            window_size = config.window_size,
            alpha = config.alpha,
            degree = %config.trendline_degree,
            "analyzing room"
        );

        let forecast = analyzer.forecast(&request.filtered_series());
        let trendline = analyzer.trendline(&request.series);

        let fitted: Vec<f64> = trendline.points.iter().map(|p| p.y).collect();
        let r_squared = r_squared_dense(&request.series.counts(), &fitted);

        let total_bookings = request.total_bookings();
        let summary = summarize(&request.series, total_bookings, request.price)?;
        let classification =
            DemandClassifier.classify(summary.avg_daily_bookings, request.price)?;

        debug!(
            room_id = ?request.room_id,
            tier = %classification.tier,
            r_squared,
            "room analyzed"
        );

        Ok(RoomAnalysis {
            room_id: request.room_id,
            name: request.name.clone(),
            forecast,
            trendline,
            r_squared,
            classification,
            summary,
        })
    }

    /// Analyze several rooms, stopping at the first invalid request.
    pub fn analyze_all(&self, requests: &[RoomRequest]) -> Result<Vec<RoomAnalysis>> {
        requests.iter().map(|r| self.analyze(r)).collect()
    }
}
